use thiserror::Error;

pub type CharlaResult<T> = Result<T, CharlaError>;

#[derive(Error, Debug)]
pub enum CharlaError {
    #[error("api error: {0}")]
    Api(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl CharlaError {
    pub fn api_error(msg: impl Into<String>) -> Self {
        CharlaError::Api(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        CharlaError::Config(msg.into())
    }
}
