//! Core business logic abstractions

pub mod cache;
pub mod config;
pub mod convert;
pub mod log;
pub mod price;
pub mod summation;
pub mod swap;
pub mod validate;

// Re-export main types for cleaner imports
pub use convert::{convert, currency_options};
pub use price::{PriceRecord, PriceSource};
pub use summation::SumMethod;
pub use swap::{SwapSession, SwapState};
pub use validate::{ConversionRequest, SwapInput, ValidationError, validate};
