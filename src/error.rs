use thiserror::Error;

#[derive(Error, Debug)]
pub enum BalanceViewError {
    #[error("No statistic found with description '{description}'")]
    Lookup { description: String },

    #[error("Invalid dataset entry #{index}: {details}")]
    InvalidDataset { index: usize, details: String },

    #[error("Invalid dashboard configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BalanceViewError>;
