use crate::error::AppResult;
use crate::ledger::ResultLedger;
use crate::models::HealthResponse;
use crate::questions::QuestionStore;
use crate::templates::PageRenderer;
use actix_web::{web, HttpResponse, Result};
use tokio::sync::Mutex;

pub struct AppState {
    pub questions: QuestionStore,
    /// Held across check, append and file write so that concurrent
    /// submissions for one task record a single answer.
    pub ledger: Mutex<ResultLedger>,
    pub renderer: PageRenderer,
}

impl AppState {
    pub fn new(questions: QuestionStore, ledger: ResultLedger) -> AppResult<Self> {
        Ok(Self {
            questions,
            ledger: Mutex::new(ledger),
            renderer: PageRenderer::new()?,
        })
    }
}

pub async fn health_check(data: web::Data<AppState>) -> Result<HttpResponse> {
    let answered = data.ledger.lock().await.len();

    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        questions: data.questions.len(),
        answered,
    };

    Ok(HttpResponse::Ok().json(response))
}
