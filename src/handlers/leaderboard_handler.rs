use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, auth::Session, errors::AppError};

#[get("/leaderboard")]
pub async fn get_leaderboard(
    state: web::Data<AppState>,
    _session: Session,
) -> Result<HttpResponse, AppError> {
    let entries = state.profile_service.leaderboard().await?;
    Ok(HttpResponse::Ok().json(entries))
}
