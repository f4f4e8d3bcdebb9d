//! Tag style registry.
//!
//! This module maps tag names to the attributes they apply:
//!
//! - [`TagValue`]: either concrete [`Attributes`](crate::Attributes) or an alias to another tag
//! - [`TagStyles`]: the registry of named tags
//! - [`StyleValidationError`]: errors from alias validation
//!
//! Aliases support a layered pattern where semantic tags (`<error>`) point at
//! presentation tags (`<alert>`), which carry the concrete attributes.

mod error;
mod registry;
mod value;

pub use error::StyleValidationError;
pub use registry::TagStyles;
pub use value::TagValue;
