use crate::error::AppError;
use crate::handlers::AppState;
use crate::models::ResetResponse;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

pub const RESET_MESSAGE: &str = "Ergebnisse zurückgesetzt!";

pub async fn get_results(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let ledger = data.ledger.lock().await;
    let body = data
        .renderer
        .render_results(ledger.records(), &data.questions)?;

    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(body))
}

pub async fn reset_results(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    data.ledger.lock().await.reset().await?;

    Ok(HttpResponse::Ok().json(ResetResponse {
        message: RESET_MESSAGE.to_string(),
    }))
}
