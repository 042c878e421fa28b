//! Route table shared by the server binary and the integration tests.

use crate::handlers::{main_handlers, results_handlers, task_handlers};
use crate::models::ErrorResponse;
use actix_web::{error, web, HttpResponse};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/task/{task_id}", web::get().to(task_handlers::get_task))
        .route("/answer", web::post().to(task_handlers::submit_answer))
        .route("/results", web::get().to(results_handlers::get_results))
        .route("/reset", web::post().to(results_handlers::reset_results))
        .route("/health", web::get().to(main_handlers::health_check));
}

/// Malformed JSON bodies are answered with 400 and an `{"error": ...}` body.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse {
            error: err.to_string(),
        });
        error::InternalError::from_response(err, response).into()
    })
}
