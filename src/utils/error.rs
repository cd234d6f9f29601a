use thiserror::Error;

#[derive(Error, Debug)]
pub enum FreteError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{message}")]
    InvalidRequestError { message: String },

    #[error("CEP inválido: {cep}")]
    InvalidPostalCodeError { cep: String },

    #[error("Nenhum serviço disponível")]
    NoServiceAvailableError,

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl FreteError {
    /// HTTP status the transport layer should answer with. Request
    /// validation problems and an all-tiers-down Correios lookup are
    /// client errors (400), everything else is a 500.
    pub fn status_code(&self) -> u16 {
        match self {
            FreteError::InvalidRequestError { .. }
            | FreteError::InvalidPostalCodeError { .. }
            | FreteError::NoServiceAvailableError => 400,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, FreteError>;
