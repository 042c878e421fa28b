use actix_web::{test, web, App};
use arv_quiz::handlers::AppState;
use arv_quiz::ledger::ResultLedger;
use arv_quiz::questions::QuestionStore;
use arv_quiz::routes::configure_routes;
use std::path::PathBuf;
use tempfile::TempDir;

pub const QUESTIONS_YAML: &str = r#"
- taskId: q1
  category: Math
  question: "2+2?"
  answers: ["3", "4", "5"]
  correctAnswer: 1
- taskId: q2
  category: Geografie
  question: Hauptstadt von Frankreich?
  answers: ["Berlin", "Paris", "Rom"]
  correctAnswer: 1
"#;

pub struct TestApp<S> {
    pub temp_dir: TempDir,
    pub state: web::Data<AppState>,
    pub app: S,
}

impl<S> TestApp<S> {
    pub fn results_path(&self) -> PathBuf {
        results_path(&self.temp_dir)
    }

    pub async fn recorded_count(&self) -> usize {
        self.state.ledger.lock().await.len()
    }
}

pub fn results_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("results.json")
}

pub fn setup_quiz_dir() -> anyhow::Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;
    std::fs::write(temp_dir.path().join("questions.yaml"), QUESTIONS_YAML)?;
    Ok(temp_dir)
}

pub async fn setup_test_app() -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
> {
    setup_test_app_in(setup_quiz_dir()?).await
}

/// Loads the question set and ledger from `temp_dir`, as the server does on
/// startup.
pub async fn setup_test_app_in(
    temp_dir: TempDir,
) -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
> {
    let questions = QuestionStore::load(&temp_dir.path().join("questions.yaml"));
    let ledger = ResultLedger::load(results_path(&temp_dir)).await;
    let state = web::Data::new(AppState::new(questions, ledger)?);

    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(configure_routes),
    )
    .await;

    Ok(TestApp {
        temp_dir,
        state,
        app,
    })
}
