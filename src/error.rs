use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShuangForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Unknown key: '{0}'")]
    UnknownKey(String),

    #[error("No key resolves for unit '{0}'")]
    UnknownUnit(String),

    #[error("Search exhausted after {attempts} attempts without a feasible layout")]
    SearchExhausted { attempts: usize },
}

pub type SfResult<T> = Result<T, ShuangForgeError>;
