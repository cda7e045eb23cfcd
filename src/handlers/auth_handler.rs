use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{ConfirmEmailRequest, LoginRequest, LogoutRequest, RefreshTokenRequest, RegisterRequest},
        response::{MessageResponse, RegisterResponse},
    },
};

#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let registration = state.auth_service.register(request.into_inner()).await?;

    // The raw confirmation token goes to the mailer, never to the client.
    Ok(HttpResponse::Created().json(RegisterResponse {
        message: "Confirmation email sent. Please check your inbox.".to_string(),
        email: registration.account.email,
    }))
}

#[post("/confirm-email")]
pub async fn confirm_email(
    state: web::Data<AppState>,
    request: web::Json<ConfirmEmailRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.auth_service.confirm_email(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.auth_service.login(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/refresh")]
pub async fn refresh_token(
    state: web::Data<AppState>,
    request: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .auth_service
        .refresh(&request.refresh_token)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/logout")]
pub async fn logout(
    state: web::Data<AppState>,
    request: web::Json<LogoutRequest>,
) -> Result<HttpResponse, AppError> {
    state.auth_service.logout(&request.refresh_token).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Logged out".to_string(),
    }))
}
