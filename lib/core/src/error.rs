use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required column '{column}' in {input}")]
    MissingColumn { input: String, column: String },

    #[error("Invalid value {value:?} for column '{column}' on line {line}")]
    InvalidValue {
        line: u64,
        column: String,
        value: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn missing_column(input: impl Into<String>, column: impl Into<String>) -> Self {
        Error::MissingColumn {
            input: input.into(),
            column: column.into(),
        }
    }
}
