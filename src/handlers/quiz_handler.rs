use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::Session,
    errors::AppError,
    models::dto::request::SubmitAnswerRequest,
};

#[post("/quiz/start")]
pub async fn start_quiz(
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let view = state.quiz_service.start_run(&session.0.sub).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[get("/quiz")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let view = state.quiz_service.current(&session.0.sub).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/quiz/answer")]
pub async fn submit_answer(
    state: web::Data<AppState>,
    session: Session,
    request: web::Json<SubmitAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .quiz_service
        .submit_answer(&session.0.sub, request.selected_option)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
