use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "arv-quiz.toml";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct QuizConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StorageConfig {
    /// YAML question set, read once at startup
    pub questions_path: PathBuf,
    /// JSON ledger of recorded answers
    pub results_path: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            storage: StorageConfig {
                questions_path: PathBuf::from("questions.yaml"),
                results_path: PathBuf::from("results.json"),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl QuizConfig {
    /// Layers built-in defaults, the config file and `ARV_QUIZ__*` environment
    /// variables, in that order.
    ///
    /// Without an explicit path, `arv-quiz.toml` in the current directory is
    /// used when present. An explicit path must exist.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let builder = Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default(
                "storage.questions_path",
                defaults.storage.questions_path.to_string_lossy().to_string(),
            )?
            .set_default(
                "storage.results_path",
                defaults.storage.results_path.to_string_lossy().to_string(),
            )?
            .set_default("logging.level", defaults.logging.level)?;

        let builder = match config_path {
            Some(path) => builder.add_source(File::from(path.to_path_buf())),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        builder
            .add_source(
                Environment::with_prefix("ARV_QUIZ")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
