//! Arbitrary-precision signed decimal arithmetic over digit strings
//!
//! This library provides [`BigDecimal`], a signed decimal value type whose
//! magnitude is a sequence of decimal digits rather than a machine integer
//! or a float. There is no width limit and no binary rounding error: what
//! you parse is what you compute with.
//!
//! ## Features
//!
//! - **Exact decimal math**: addition and subtraction never lose a digit
//! - **Bounded growth**: a per-value fractional-precision cap keeps
//!   multiplication and division results from growing without bound
//! - **Configurable rounding**: half-up, always-up, and truncating rounding
//!   at any digit position on either side of the decimal point
//! - **no_std compatible**: only `alloc` is required
//! - **Serde support**: string-based serialization behind the `serde`
//!   feature
//!
//! ## Example
//!
//! ```rust
//! use bigdec::BigDecimal;
//! use core::str::FromStr;
//!
//! let price = BigDecimal::from_str("1234.56").unwrap();
//! let quantity = BigDecimal::from(100u32);
//! let total = &price * &quantity;
//! assert_eq!(total.to_string(), "123456");
//!
//! // Division is rounded half-up to the fractional-precision cap
//! let a = BigDecimal::from_str_with_max_frac_len("10", 2).unwrap();
//! let b = BigDecimal::from_str_with_max_frac_len("3", 2).unwrap();
//! assert_eq!((&a / &b).to_string(), "3.33");
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod decimal;
mod digits;

pub use decimal::{BigDecimal, RoundingPosition};

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalError {
    #[error("invalid string format")]
    InvalidFormat,

    #[error("division by zero")]
    DivisionByZero,
}

pub type Result<T> = core::result::Result<T, DecimalError>;
