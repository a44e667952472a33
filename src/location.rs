//! The contract every concrete location type implements.

use crate::error::{LocationError, ParsingError};
use crate::percent;
use crate::scheme::{LocatorKind, Scheme};

/// A location URL object: one item inside a hierarchical content source.
///
/// A location starts out empty and invalid. It is populated either through
/// its field setters or atomically through [`Location::set_url`], and turns
/// back into the empty state through [`Location::clear`]. Serialization via
/// [`Location::url_string`] is a pure function of the stored fields, never
/// of a previously parsed string, so mutating a field after a parse is
/// reflected in the next rendered URL.
///
/// # Examples
///
/// ```
/// use strbo_url::usb;
/// use strbo_url::Location;
///
/// let mut key = usb::LocationKeySimple::new();
/// assert!(!key.is_valid());
///
/// key.set_url("strbo-usb://dev:part/Music%2F05.flac").unwrap();
/// assert!(key.is_valid());
/// assert_eq!(key.unpack().path, "Music/05.flac");
/// assert_eq!(key.url_string(), "strbo-usb://dev:part/Music%2F05.flac");
///
/// key.clear();
/// assert!(!key.is_valid());
/// assert_eq!(key.url_string(), "");
/// ```
pub trait Location {
    /// Locator shape of the bound scheme.
    type Kind: LocatorKind;

    /// The scheme this location accepts and produces.
    fn scheme(&self) -> &Scheme<Self::Kind>;

    /// Resets all fields and flags; the location is invalid afterwards.
    fn clear(&mut self);

    /// True when every structurally required field is populated.
    fn is_valid(&self) -> bool;

    /// Diagnostic prefix identifying this location variant in error output.
    fn error_prefix(&self) -> &'static str;

    /// Renders the URL from the current field state.
    ///
    /// Contract: called only after [`Location::is_valid`] returned true.
    /// Implementations perform no further checks and return a complete,
    /// non-empty URL.
    fn render_url(&self) -> String;

    /// Variant-specific parse starting right after the `://` separator.
    ///
    /// Contract: the scheme prefix has already been verified and `offset`
    /// points at the first byte after it. Implementations populate their
    /// fields from the URL's components rather than keeping the URL string,
    /// and leave the previous state untouched when they fail. On success an
    /// optional normalization warning is returned.
    ///
    /// # Errors
    ///
    /// A [`LocationError::Parsing`] value for any structural or decode
    /// failure.
    fn set_url_fields(
        &mut self,
        url: &str,
        offset: usize,
    ) -> Result<Option<&'static str>, LocationError>;

    /// Replaces the location's state with the result of parsing `url`.
    ///
    /// On error the previous state is left untouched. A successful parse
    /// may return a static warning string describing a normalization that
    /// was applied (such as dropping a redundant explicit root reference).
    ///
    /// # Errors
    ///
    /// [`LocationError::WrongScheme`] when `url` does not start with the
    /// bound scheme, [`LocationError::InvalidCharacters`] when it contains
    /// a character outside the accepted URL alphabet, and
    /// [`LocationError::Parsing`] for any component-level failure.
    fn set_url(&mut self, url: &str) -> Result<Option<&'static str>, LocationError> {
        if !self.scheme().matches(url) {
            return Err(LocationError::WrongScheme {
                expected: self.scheme().name(),
            });
        }

        if !url.chars().all(percent::is_valid_url_char) {
            return Err(LocationError::InvalidCharacters {
                error_prefix: self.error_prefix(),
            });
        }

        self.set_url_fields(url, self.scheme().name().len() + 3)
    }

    /// The URL string for the current state; empty when the location is
    /// invalid.
    fn url_string(&self) -> String {
        if self.is_valid() {
            self.render_url()
        } else {
            String::new()
        }
    }
}

/// Decodes one extracted field, mapping decode diagnostics to a
/// [`ParsingError`] for the given component.
pub(crate) fn decode_component(
    field: &str,
    error_prefix: &'static str,
    component: Option<&'static str>,
) -> Result<String, LocationError> {
    percent::url_decode(field)
        .map_err(|message| ParsingError::new(error_prefix, component, message).into())
}
