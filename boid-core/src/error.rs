use thiserror::Error;

/// Failures raised by vector arithmetic
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    #[error("division of a vector by zero")]
    DivisionByZero,
}
