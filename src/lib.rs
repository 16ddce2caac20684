pub mod cli;
pub mod config;
pub mod dns;
pub mod error;
pub mod output;

pub type Result<T> = std::result::Result<T, error::AppError>;
