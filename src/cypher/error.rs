use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Query has no clauses")]
    EmptyQuery,

    #[error("Invalid parameter name: {0:?}")]
    InvalidParameterName(String),

    #[error("Parameter ${0} is referenced but never bound")]
    UnboundParameter(String),

    #[error("Parameter error: {0}")]
    Parameter(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error (status {status}): {message}")]
    Http { status: u16, message: String },

    #[error("Server error {code}: {message}")]
    Server { code: String, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Bolt error: {0}")]
    Bolt(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for GraphError {
    fn from(err: reqwest::Error) -> Self {
        GraphError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::Decode(err.to_string())
    }
}

impl From<neo4rs::Error> for GraphError {
    fn from(err: neo4rs::Error) -> Self {
        GraphError::Bolt(err.to_string())
    }
}

impl From<neo4rs::DeError> for GraphError {
    fn from(err: neo4rs::DeError) -> Self {
        GraphError::Decode(err.to_string())
    }
}
