use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use arv_quiz::config::QuizConfig;
use arv_quiz::error::AppResult;
use arv_quiz::handlers::AppState;
use arv_quiz::ledger::ResultLedger;
use arv_quiz::questions::QuestionStore;
use arv_quiz::routes::configure_routes;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "arv-quiz", version, about = "ArV-Quiz server")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Port to listen on, overrides the configured port
    #[arg(short, long)]
    port: Option<u16>,
}

#[actix_web::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let mut config = QuizConfig::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();

    let questions = QuestionStore::load(&config.storage.questions_path);
    let ledger = ResultLedger::load(&config.storage.results_path).await;
    let app_state = web::Data::new(AppState::new(questions, ledger)?);

    let bind_addr = config.bind_addr();
    info!("ArV-Quiz server running at http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
