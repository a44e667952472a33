//! Parser and serializer for Streaming Board location URL schemes.
//!
//! This crate implements the family of `strbo-*` URL schemes used to address
//! items (tracks, folders, containers) inside hierarchical media sources.
//! Every scheme comes in one of three shapes:
//!
//! - **Simple key** — names only the item itself:
//!   `strbo-usb://<device>:<partition>/<path>`
//! - **Reference key** — names the item plus its containing list and 1-based
//!   position: `strbo-ref-airable://<list>/<item>:<position>`
//! - **Trace** — names the full path of (name, position) pairs from a
//!   reference point down to the item:
//!   `strbo-trace-airable://<ref>/<name>:<pos>/<item>:<pos>`
//!
//! Two sources are covered, USB mass storage ([`usb`]) and the Airable
//! content service ([`airable`]). New sources implement the same
//! [`Location`] contract from the building blocks re-exported at the crate
//! root; the core engine does not change.
//!
//! # Quick Start
//!
//! ```rust
//! use strbo_url::usb;
//! use strbo_url::Location;
//!
//! // Parse a location URL
//! let mut key = usb::LocationKeySimple::new();
//! key.set_url("strbo-usb://usb-device:usb-device-part1/Music%2F05.flac")
//!     .unwrap();
//!
//! assert!(key.is_valid());
//! assert_eq!(key.unpack().device, "usb-device");
//! assert_eq!(key.unpack().path, "Music/05.flac");
//!
//! // Serialization reproduces the canonical form from the field state
//! assert_eq!(
//!     key.url_string(),
//!     "strbo-usb://usb-device:usb-device-part1/Music%2F05.flac"
//! );
//!
//! // Locations can equally be populated field by field
//! let mut key = usb::LocationKeySimple::new();
//! key.set_device("usb-device");
//! key.set_partition("usb-device-part1");
//! key.append_to_path("Music");
//! key.append_to_path("05.flac");
//! assert_eq!(
//!     key.url_string(),
//!     "strbo-usb://usb-device:usb-device-part1/Music%2F05.flac"
//! );
//! ```
//!
//! # Grammar
//!
//! Percent-encoding is applied to each `enc-*` placeholder; positions are
//! decimal numerals that fit into 32 bits, with `0` denoting "unset":
//!
//! ```text
//! simple-key = scheme "://" enc-item
//! ref-key    = scheme "://" enc-list "/" enc-item ":" position
//! trace      = scheme "://" enc-ref ["/" enc-name ":" position
//!                  *(":" enc-name ":" position)] "/" enc-item ":" position
//! ```
//!
//! # Errors and warnings
//!
//! Parsing is atomic: any structural or decode error aborts the whole parse
//! with a typed [`LocationError`] and leaves the previous state untouched.
//! Some accepted inputs are normalized — a redundant explicit root reference
//! is dropped — and reported through a non-fatal warning string returned by
//! [`Location::set_url`].

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod airable;
mod error;
mod field;
mod index;
mod location;
mod percent;
pub mod prelude;
mod scheme;
pub mod usb;

pub use error::{FieldError, LocationError, ParsingError, PositionError};
pub use field::{extract_field, FieldPolicy};
pub use index::{item_position, item_position_bounded, ObjectIndex};
pub use location::Location;
pub use percent::{
    for_each_url_decoded, is_safe_char, is_valid_url_char, url_decode, url_encode, url_encode_into,
};
pub use scheme::{
    LocatorKind, ReferenceKind, ReferenceScheme, Scheme, SimpleKind, SimpleScheme, TraceKind,
    TraceScheme,
};
