use crate::error::AppError;
use crate::handlers::AppState;
use crate::models::SubmitAnswerRequest;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use tracing::{debug, warn};

pub async fn get_task(
    task_id: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let task_id = task_id.into_inner();

    let Some(question) = data.questions.find_by_task_id(&task_id) else {
        warn!(task_id = %task_id, "Question not found");
        let body = data.renderer.render_not_found()?;
        return Ok(HttpResponse::NotFound()
            .content_type(ContentType::html())
            .body(body));
    };

    let given_answer = data.ledger.lock().await.given_answer(&task_id);
    let body = data.renderer.render_question(question, given_answer)?;

    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(body))
}

pub async fn submit_answer(
    data: web::Data<AppState>,
    request: web::Json<SubmitAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let req = request.into_inner();

    let question = data.questions.find_by_task_id(&req.task_id).ok_or_else(|| {
        warn!(task_id = %req.task_id, "Answer submitted for unknown task");
        AppError::InvalidRequest("Invalid taskId".to_string())
    })?;

    let mut ledger = data.ledger.lock().await;
    if ledger.has_answered(&question.task_id) {
        debug!(task_id = %req.task_id, "Task already answered, ignoring");
        return Ok(HttpResponse::Ok().finish());
    }

    if question.answer_text(req.answer).is_none() {
        warn!(
            task_id = %req.task_id,
            answer = req.answer,
            "Answer index out of range"
        );
        return Err(AppError::InvalidRequest("Invalid answer".to_string()));
    }

    ledger
        .record_answer(
            &question.task_id,
            &question.category,
            req.answer,
            question.correct_answer,
        )
        .await?;

    Ok(HttpResponse::Ok().finish())
}
