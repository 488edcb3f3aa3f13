use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecaseError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecaseError {
    #[error("Invalid input type: expected a string, got {type_name} value {rendered}")]
    InvalidInputType { type_name: String, rendered: String },

    #[error("Unknown case style: {0}")]
    UnknownStyle(String),
}
