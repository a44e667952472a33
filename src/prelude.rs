//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use strbo_url::prelude::*;
//!
//! let mut key = usb::LocationKeySimple::new();
//! key.set_url("strbo-usb://dev:part/file").unwrap();
//! assert!(key.is_valid());
//! ```

pub use crate::{
    // Domains
    airable, usb,
    // Core types
    FieldPolicy, Location, ObjectIndex, ReferenceScheme, Scheme, SimpleScheme, TraceScheme,
    // Errors
    FieldError, LocationError, ParsingError, PositionError,
};
