use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Invalid input value: {value}")]
    InvalidInput { value: String },

    #[error("Input value must be non-negative")]
    NegativeBound,
}

pub type Result<T> = std::result::Result<T, SearchError>;
