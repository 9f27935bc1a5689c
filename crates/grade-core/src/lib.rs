#![deny(missing_docs)]
#![doc = "Core error and numeric types shared by the answer grading crates."]

pub mod errors;
pub mod number;

pub use errors::{ErrorInfo, GradeError};
pub use number::{format_decimal, Numeric};

/// Re-export of the decimal type used for fixed-point expected values.
pub use bigdecimal::BigDecimal;
