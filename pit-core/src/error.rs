use rust_decimal::Decimal;
use thiserror::Error;

/// The engine's only failure category: a request it refuses to compute.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("invalid input: gross salary must be non-negative, got {0}")]
    NegativeGrossSalary(Decimal),

    #[error("invalid input: dependents must be non-negative, got {0}")]
    NegativeDependents(i32),

    #[error("invalid input: region must be 1, 2, 3 or 4, got {0}")]
    UnknownRegion(u8),

    #[error("invalid input: custom insurance mode requires an amount")]
    MissingCustomInsurance,

    #[error("invalid input: custom insurance must be non-negative, got {0}")]
    NegativeCustomInsurance(Decimal),

    #[error("invalid input: target net salary must be non-negative, got {0}")]
    NegativeTargetNet(Decimal),
}
