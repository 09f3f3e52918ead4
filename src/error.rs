
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Invalid age: {0}")]
    InvalidAge(i64),
}

pub type Result<T> = std::result::Result<T, RosterError>;

// Helper conversions
impl From<config::ConfigError> for RosterError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
