//! 1-based object indices and their numeral parser.

use std::fmt;

use crate::error::PositionError;

/// Position of an object within its containing list, starting at 1.
///
/// The resource referenced by a reference key or a trace is expected to be
/// found in a list; this type records where. Zero is the "unset" sentinel,
/// so a default-constructed index is invalid.
///
/// # Examples
///
/// ```
/// use strbo_url::ObjectIndex;
///
/// assert!(!ObjectIndex::default().is_valid());
/// assert!(ObjectIndex::new(1).is_valid());
/// assert_eq!(ObjectIndex::new(42).get(), 42);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectIndex(u32);

impl ObjectIndex {
    /// Creates an index; `0` yields the unset sentinel.
    #[must_use]
    pub const fn new(idx: u32) -> Self {
        Self(idx)
    }

    /// Returns true when the index refers to an actual list position.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }

    /// The raw 1-based value; `0` when unset.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ObjectIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ObjectIndex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ObjectIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        u32::deserialize(deserializer).map(Self::new)
    }
}

/// Parses the item-position numeral that must span to the end of `url`.
///
/// The numeral starts at byte offset `offset` and must consist of decimal
/// digits only, with no sign and nothing after it. A value of `0` parses
/// successfully but yields an invalid index.
///
/// # Errors
///
/// [`PositionError::ComponentEmpty`] when the region is empty,
/// [`PositionError::TrailingJunk`] when non-digits follow the numeral,
/// [`PositionError::OutOfRange`] when the value exceeds 32 bits.
pub fn item_position(url: &str, offset: usize) -> Result<ObjectIndex, PositionError> {
    parse_position(url, offset, url.len(), true)
}

/// Parses an item-position numeral ending at the soft boundary
/// `expected_end`.
///
/// Digits are consumed from `offset` up to the first non-digit or
/// `expected_end`, whichever comes first; anything after that is ignored.
/// A region without leading digits yields the unset index rather than an
/// error.
///
/// # Errors
///
/// [`PositionError::ComponentEmpty`] when `offset >= expected_end`,
/// [`PositionError::OutOfRange`] when the value exceeds 32 bits.
pub fn item_position_bounded(
    url: &str,
    offset: usize,
    expected_end: usize,
) -> Result<ObjectIndex, PositionError> {
    parse_position(url, offset, expected_end, false)
}

fn parse_position(
    url: &str,
    offset: usize,
    expected_end: usize,
    must_consume_all: bool,
) -> Result<ObjectIndex, PositionError> {
    if offset >= expected_end {
        return Err(PositionError::ComponentEmpty);
    }

    let bytes = url.as_bytes();
    let mut value: u64 = 0;
    let mut i = offset;

    while i < expected_end && i < bytes.len() && bytes[i].is_ascii_digit() {
        value = value * 10 + u64::from(bytes[i] - b'0');

        if value > u64::from(u32::MAX) {
            return Err(PositionError::OutOfRange);
        }

        i += 1;
    }

    if must_consume_all && i < bytes.len() {
        return Err(PositionError::TrailingJunk);
    }

    u32::try_from(value)
        .map(ObjectIndex::new)
        .map_err(|_| PositionError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_position_at_end_of_url() {
        assert_eq!(item_position("item:17", 5), Ok(ObjectIndex::new(17)));
    }

    #[test]
    fn zero_parses_to_invalid_index() {
        let idx = item_position("item:0", 5).unwrap();
        assert_eq!(idx.get(), 0);
        assert!(!idx.is_valid());
    }

    #[test]
    fn max_u32_is_accepted() {
        assert_eq!(
            item_position("item:4294967295", 5),
            Ok(ObjectIndex::new(u32::MAX))
        );
    }

    #[test]
    fn one_past_max_is_out_of_range() {
        assert_eq!(item_position("item:4294967296", 5), Err(PositionError::OutOfRange));
    }

    #[test]
    fn empty_region_is_an_error() {
        assert_eq!(item_position("item:", 5), Err(PositionError::ComponentEmpty));
    }

    #[test]
    fn sign_is_rejected() {
        assert_eq!(item_position("item:-1", 5), Err(PositionError::TrailingJunk));
        assert_eq!(item_position("item:+1", 5), Err(PositionError::TrailingJunk));
    }

    #[test]
    fn trailing_junk_is_rejected_at_end_of_url() {
        assert_eq!(item_position("item:12x", 5), Err(PositionError::TrailingJunk));
    }

    #[test]
    fn bounded_parse_ignores_what_follows_the_boundary() {
        assert_eq!(item_position_bounded("a:12:b", 2, 4), Ok(ObjectIndex::new(12)));
    }

    #[test]
    fn bounded_parse_without_digits_yields_unset_index() {
        let idx = item_position_bounded("a:xy:b", 2, 4).unwrap();
        assert!(!idx.is_valid());
    }

    #[test]
    fn bounded_parse_of_empty_region_is_an_error() {
        assert_eq!(
            item_position_bounded("a::b", 2, 2),
            Err(PositionError::ComponentEmpty)
        );
    }

    #[test]
    fn display_writes_raw_value() {
        assert_eq!(ObjectIndex::new(7).to_string(), "7");
        assert_eq!(ObjectIndex::default().to_string(), "0");
    }
}
