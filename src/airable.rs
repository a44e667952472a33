//! Location URLs for items in the Airable content service.
//!
//! Airable items are themselves addressed by URLs, so the shapes here wrap
//! one encoded URL per level. The trace shape keeps the full list of
//! (URL, position) pairs from the reference point down to the item.

use std::fmt;
use std::str::FromStr;

use crate::error::{LocationError, ParsingError};
use crate::field::{extract_field, require_field, FieldPolicy};
use crate::index::{self, ObjectIndex};
use crate::location::{decode_component, Location};
use crate::percent::{url_decode, url_encode_into};
use crate::scheme::{ReferenceKind, ReferenceScheme, Scheme, SimpleKind, SimpleScheme, TraceKind, TraceScheme};

/// The `strbo-airable` scheme.
pub const SIMPLE_SCHEME: SimpleScheme = Scheme::new("strbo-airable");

/// The `strbo-ref-airable` scheme.
pub const REFERENCE_SCHEME: ReferenceScheme = Scheme::new("strbo-ref-airable");

/// The `strbo-trace-airable` scheme.
pub const TRACE_SCHEME: TraceScheme = Scheme::new("strbo-trace-airable");

const SIMPLE_PREFIX: &str = "Simple Airable location key malformed: ";
const REFERENCE_PREFIX: &str = "Reference Airable location key malformed: ";
const TRACE_PREFIX: &str = "Airable location trace malformed: ";

/// Components of a [`LocationKeySimple`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleComponents {
    /// URL of the item inside the Airable service; empty addresses the
    /// service root.
    pub item_url: String,
}

/// Simple location key for an Airable item.
///
/// URL shape: `strbo-airable://<item-url>`.
///
/// # Examples
///
/// ```
/// use strbo_url::airable::LocationKeySimple;
/// use strbo_url::Location;
///
/// let mut key = LocationKeySimple::new();
/// key.set_url("strbo-airable://radios%2Ffrance").unwrap();
/// assert_eq!(key.unpack().item_url, "radios/france");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocationKeySimple {
    components: SimpleComponents,
    is_item_set: bool,
}

impl LocationKeySimple {
    /// Creates an empty, invalid location key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the item URL.
    pub fn set_item(&mut self, item_url: impl Into<String>) {
        self.components.item_url = item_url.into();
        self.is_item_set = true;
    }

    /// Read-only view of the underlying components.
    #[must_use]
    pub fn unpack(&self) -> &SimpleComponents {
        &self.components
    }
}

impl Location for LocationKeySimple {
    type Kind = SimpleKind;

    fn scheme(&self) -> &SimpleScheme {
        &SIMPLE_SCHEME
    }

    fn clear(&mut self) {
        self.components = SimpleComponents::default();
        self.is_item_set = false;
    }

    fn is_valid(&self) -> bool {
        self.is_item_set
    }

    fn error_prefix(&self) -> &'static str {
        SIMPLE_PREFIX
    }

    fn render_url(&self) -> String {
        let mut url = String::from(SIMPLE_SCHEME.name());
        url.push_str("://");
        url_encode_into(&mut url, &self.components.item_url);
        url
    }

    fn set_url_fields(
        &mut self,
        url: &str,
        offset: usize,
    ) -> Result<Option<&'static str>, LocationError> {
        if offset >= url.len() {
            self.components.item_url.clear();
            self.is_item_set = true;
            return Ok(Some("Simple Airable location key is empty"));
        }

        let mut item_url = decode_component(&url[offset..], SIMPLE_PREFIX, None)?;

        let warning = if item_url == "/" {
            item_url.clear();
            Some("Simple Airable location key contains unneeded explicit reference to root")
        } else {
            None
        };

        self.components.item_url = item_url;
        self.is_item_set = true;

        Ok(warning)
    }
}

impl fmt::Display for LocationKeySimple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url_string())
    }
}

impl FromStr for LocationKeySimple {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut key = Self::new();
        key.set_url(s)?;
        Ok(key)
    }
}

/// Components of a [`LocationKeyReference`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceComponents {
    /// URL of the list containing the item; empty means the service root.
    pub containing_list_url: String,
    /// URL of the item itself.
    pub item_url: String,
    /// 1-based position of the item in the containing list.
    pub item_position: ObjectIndex,
}

/// Reference location key for an Airable item.
///
/// URL shape: `strbo-ref-airable://<containing-list>/<item>:<position>`.
#[derive(Debug, Clone, Default)]
pub struct LocationKeyReference {
    components: ReferenceComponents,
    is_containing_list_set: bool,
}

impl LocationKeyReference {
    /// Creates an empty, invalid location key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the URL of the containing list.
    pub fn set_containing_list(&mut self, url: impl Into<String>) {
        self.components.containing_list_url = url.into();
        self.is_containing_list_set = true;
    }

    /// Sets the item URL and its position in the containing list.
    pub fn set_item(&mut self, url: impl Into<String>, position: ObjectIndex) {
        self.components.item_url = url.into();
        self.components.item_position = position;
    }

    /// Read-only view of the underlying components.
    #[must_use]
    pub fn unpack(&self) -> &ReferenceComponents {
        &self.components
    }
}

impl Location for LocationKeyReference {
    type Kind = ReferenceKind;

    fn scheme(&self) -> &ReferenceScheme {
        &REFERENCE_SCHEME
    }

    fn clear(&mut self) {
        self.components = ReferenceComponents::default();
        self.is_containing_list_set = false;
    }

    fn is_valid(&self) -> bool {
        self.is_containing_list_set
            && !self.components.item_url.is_empty()
            && self.components.item_position.is_valid()
    }

    fn error_prefix(&self) -> &'static str {
        REFERENCE_PREFIX
    }

    fn render_url(&self) -> String {
        let mut url = String::from(REFERENCE_SCHEME.name());
        url.push_str("://");
        url_encode_into(&mut url, &self.components.containing_list_url);
        url.push('/');
        url_encode_into(&mut url, &self.components.item_url);
        url.push(':');
        url.push_str(&self.components.item_position.get().to_string());
        url
    }

    fn set_url_fields(
        &mut self,
        url: &str,
        offset: usize,
    ) -> Result<Option<&'static str>, LocationError> {
        let end_of_reference = require_field(url, offset, '/', FieldPolicy::MayBeEmpty)
            .map_err(|e| {
                ParsingError::new(REFERENCE_PREFIX, Some("Reference point"), e.to_string())
            })?;

        let end_of_item =
            require_field(url, end_of_reference + 1, ':', FieldPolicy::MustNotBeEmpty)
                .map_err(|e| ParsingError::new(REFERENCE_PREFIX, Some("Item"), e.to_string()))?;

        let item_position = index::item_position(url, end_of_item + 1)
            .map_err(|e| ParsingError::new(REFERENCE_PREFIX, Some("Item position"), e.to_string()))?;

        let mut containing_list_url = if offset < end_of_reference {
            decode_component(&url[offset..end_of_reference], REFERENCE_PREFIX, None)?
        } else {
            String::new()
        };

        let item_url =
            decode_component(&url[end_of_reference + 1..end_of_item], REFERENCE_PREFIX, None)?;

        let warning = if containing_list_url == "/" {
            containing_list_url.clear();
            Some("Reference Airable location key contains unneeded explicit reference to root")
        } else {
            None
        };

        self.components = ReferenceComponents {
            containing_list_url,
            item_url,
            item_position,
        };
        self.is_containing_list_set = true;

        Ok(warning)
    }
}

impl fmt::Display for LocationKeyReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url_string())
    }
}

impl FromStr for LocationKeyReference {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut key = Self::new();
        key.set_url(s)?;
        Ok(key)
    }
}

/// Components of a [`LocationTrace`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceComponents {
    /// URL of the reference point; empty means the service root.
    pub reference_point_url: String,
    /// Intermediate levels between the reference point and the item, as
    /// (URL, position) pairs ordered from the reference point downwards.
    pub trace_urls: Vec<(String, ObjectIndex)>,
    /// URL of the item itself.
    pub item_url: String,
    /// 1-based position of the item in its immediate parent list.
    pub item_position: ObjectIndex,
}

/// Location trace for an Airable item.
///
/// URL shape:
/// `strbo-trace-airable://<ref>[/<name>:<pos>(:<name>:<pos>)*]/<item>:<position>`.
/// The trace segment holds zero or more (name, position) pairs; an absent
/// segment means the item sits directly below the reference point.
#[derive(Debug, Clone, Default)]
pub struct LocationTrace {
    components: TraceComponents,
    is_reference_point_set: bool,
}

impl LocationTrace {
    /// Creates an empty, invalid location trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of levels between the reference point and the item,
    /// including the item itself when it is set.
    #[must_use]
    pub fn trace_length(&self) -> usize {
        self.components.trace_urls.len() + usize::from(!self.components.item_url.is_empty())
    }

    /// Sets the URL of the reference point.
    pub fn set_reference_point(&mut self, url: impl Into<String>) {
        self.components.reference_point_url = url.into();
        self.is_reference_point_set = true;
    }

    /// Appends one intermediate level to the trace.
    pub fn append_to_trace(&mut self, url: impl Into<String>, position: ObjectIndex) {
        self.components.trace_urls.push((url.into(), position));
    }

    /// Sets the item URL and its position in its parent list.
    pub fn set_item(&mut self, url: impl Into<String>, position: ObjectIndex) {
        self.components.item_url = url.into();
        self.components.item_position = position;
    }

    /// Read-only view of the underlying components.
    #[must_use]
    pub fn unpack(&self) -> &TraceComponents {
        &self.components
    }
}

/// Parses the alternating `<name>:<position>` pairs between `start` and
/// `end`.
///
/// A position of zero ends trace consumption early without raising an
/// error; the pairs collected so far are kept.
fn parse_trace(
    url: &str,
    start: usize,
    end: usize,
) -> Result<Vec<(String, ObjectIndex)>, LocationError> {
    if start >= end {
        return Err(ParsingError::new(TRACE_PREFIX, None, "Empty trace").into());
    }

    let mut trace = Vec::new();
    let mut start_of_token = start;
    let mut expecting_item_url = true;

    while start_of_token < end {
        let end_of_field = url[start_of_token..end]
            .find(':')
            .map_or(end, |pos| start_of_token + pos);

        if end_of_field == start_of_token {
            return Err(ParsingError::new(TRACE_PREFIX, None, "Empty field in trace").into());
        }

        if expecting_item_url {
            let name = url_decode(&url[start_of_token..end_of_field]).map_err(|message| {
                ParsingError::new(TRACE_PREFIX, Some("Trace item URL"), message)
            })?;
            trace.push((name, ObjectIndex::default()));
        } else {
            let position = index::item_position_bounded(url, start_of_token, end_of_field)
                .map_err(|e| {
                    ParsingError::new(TRACE_PREFIX, Some("Trace item position"), e.to_string())
                })?;

            if let Some(last) = trace.last_mut() {
                last.1 = position;
            }

            if !position.is_valid() {
                return Ok(trace);
            }
        }

        expecting_item_url = !expecting_item_url;
        start_of_token = end_of_field + 1;
    }

    if !expecting_item_url {
        return Err(ParsingError::new(TRACE_PREFIX, None, "Odd number of fields in trace").into());
    }

    Ok(trace)
}

impl Location for LocationTrace {
    type Kind = TraceKind;

    fn scheme(&self) -> &TraceScheme {
        &TRACE_SCHEME
    }

    fn clear(&mut self) {
        self.components = TraceComponents::default();
        self.is_reference_point_set = false;
    }

    fn is_valid(&self) -> bool {
        self.is_reference_point_set
            && !self.components.item_url.is_empty()
            && self.components.item_position.is_valid()
    }

    fn error_prefix(&self) -> &'static str {
        TRACE_PREFIX
    }

    fn render_url(&self) -> String {
        let mut url = String::from(TRACE_SCHEME.name());
        url.push_str("://");
        url_encode_into(&mut url, &self.components.reference_point_url);

        if !self.components.trace_urls.is_empty() {
            url.push('/');

            let mut is_first = true;

            for (name, position) in &self.components.trace_urls {
                if is_first {
                    is_first = false;
                } else {
                    url.push(':');
                }

                url_encode_into(&mut url, name);
                url.push(':');
                url.push_str(&position.get().to_string());
            }
        }

        url.push('/');
        url_encode_into(&mut url, &self.components.item_url);
        url.push(':');
        url.push_str(&self.components.item_position.get().to_string());
        url
    }

    fn set_url_fields(
        &mut self,
        url: &str,
        offset: usize,
    ) -> Result<Option<&'static str>, LocationError> {
        let end_of_reference = require_field(url, offset, '/', FieldPolicy::MayBeEmpty)
            .map_err(|e| ParsingError::new(TRACE_PREFIX, Some("Reference point"), e.to_string()))?;

        let end_of_trace =
            extract_field(url, end_of_reference + 1, '/', FieldPolicy::Optional)
                .map_err(|e| ParsingError::new(TRACE_PREFIX, Some("Trace"), e.to_string()))?;

        let start_of_item = end_of_trace.unwrap_or(end_of_reference) + 1;

        let end_of_item = require_field(url, start_of_item, ':', FieldPolicy::MustNotBeEmpty)
            .map_err(|e| ParsingError::new(TRACE_PREFIX, Some("Item"), e.to_string()))?;

        let item_position = index::item_position(url, end_of_item + 1)
            .map_err(|e| ParsingError::new(TRACE_PREFIX, Some("Item position"), e.to_string()))?;

        let trace_urls = match end_of_trace {
            Some(end) => parse_trace(url, end_of_reference + 1, end)?,
            None => Vec::new(),
        };

        let mut reference_point_url = if offset < end_of_reference {
            decode_component(
                &url[offset..end_of_reference],
                TRACE_PREFIX,
                Some("Reference point URL"),
            )?
        } else {
            String::new()
        };

        let item_url = decode_component(
            &url[start_of_item..end_of_item],
            TRACE_PREFIX,
            Some("Reference item URL"),
        )?;

        let warning = if reference_point_url == "/" {
            reference_point_url.clear();
            Some("Airable location trace contains unneeded explicit reference to root")
        } else {
            None
        };

        self.components = TraceComponents {
            reference_point_url,
            trace_urls,
            item_url,
            item_position,
        };
        self.is_reference_point_set = true;

        Ok(warning)
    }
}

impl fmt::Display for LocationTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url_string())
    }
}

impl FromStr for LocationTrace {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut trace = Self::new();
        trace.set_url(s)?;
        Ok(trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod simple {
        use super::*;

        #[test]
        fn scheme_is_as_expected() {
            assert_eq!(LocationKeySimple::new().scheme().name(), "strbo-airable");
        }

        #[test]
        fn empty_locator_is_invalid() {
            let key = LocationKeySimple::new();
            assert!(!key.is_valid());
            assert_eq!(key.url_string(), "");
        }

        #[test]
        fn item_url_roundtrips() {
            let expected = "strbo-airable://radios%2Ffrance%2Fparis";
            let mut key = LocationKeySimple::new();
            assert_eq!(key.set_url(expected), Ok(None));
            assert!(key.is_valid());
            assert_eq!(key.unpack().item_url, "radios/france/paris");
            assert_eq!(key.url_string(), expected);
        }

        #[test]
        fn empty_key_parses_with_warning() {
            let mut key = LocationKeySimple::new();
            assert_eq!(
                key.set_url("strbo-airable://"),
                Ok(Some("Simple Airable location key is empty"))
            );
            assert!(key.is_valid());
            assert!(key.unpack().item_url.is_empty());
            assert_eq!(key.url_string(), "strbo-airable://");
        }

        #[test]
        fn explicit_root_reference_is_normalized_with_warning() {
            let mut key = LocationKeySimple::new();
            assert_eq!(
                key.set_url("strbo-airable://%2F"),
                Ok(Some(
                    "Simple Airable location key contains unneeded explicit reference to root"
                ))
            );
            assert!(key.is_valid());
            assert!(key.unpack().item_url.is_empty());
            assert_eq!(key.url_string(), "strbo-airable://");
        }

        #[test]
        fn malformed_escape_fails_with_diagnostic() {
            let mut key = LocationKeySimple::new();
            let err = key.set_url("strbo-airable://a%Z9b").unwrap_err();
            let LocationError::Parsing(e) = err else {
                panic!("expected parsing error");
            };
            assert_eq!(e.component(), "URL");
            assert!(e.message().contains("%Z9"));
            assert!(e.message().contains("in URL \"a%Z9b\""));
        }

        #[test]
        fn wrong_scheme_is_rejected() {
            let mut key = LocationKeySimple::new();
            assert!(matches!(
                key.set_url("strbo-trace-airable://x/y:1"),
                Err(LocationError::WrongScheme { .. })
            ));
        }

        #[test]
        fn set_item_populates_key() {
            let mut key = LocationKeySimple::new();
            key.set_item("radios/france");
            assert!(key.is_valid());
            assert_eq!(key.url_string(), "strbo-airable://radios%2Ffrance");
        }
    }

    mod reference {
        use super::*;

        #[test]
        fn scheme_is_as_expected() {
            assert_eq!(LocationKeyReference::new().scheme().name(), "strbo-ref-airable");
        }

        #[test]
        fn url_roundtrips() {
            let expected = "strbo-ref-airable://radios%2Ffrance/radios%2Ffrance%2Fparis:17";
            let mut key = LocationKeyReference::new();
            assert_eq!(key.set_url(expected), Ok(None));
            assert!(key.is_valid());
            assert_eq!(key.url_string(), expected);

            let c = key.unpack();
            assert_eq!(c.containing_list_url, "radios/france");
            assert_eq!(c.item_url, "radios/france/paris");
            assert_eq!(c.item_position, ObjectIndex::new(17));
        }

        #[test]
        fn empty_containing_list_is_accepted() {
            let expected = "strbo-ref-airable:///item:2";
            let mut key = LocationKeyReference::new();
            assert_eq!(key.set_url(expected), Ok(None));
            assert!(key.is_valid());
            assert!(key.unpack().containing_list_url.is_empty());
            assert_eq!(key.url_string(), expected);
        }

        #[test]
        fn explicit_root_list_is_normalized_with_warning() {
            let mut key = LocationKeyReference::new();
            assert_eq!(
                key.set_url("strbo-ref-airable://%2F/item:2"),
                Ok(Some(
                    "Reference Airable location key contains unneeded explicit reference to root"
                ))
            );
            assert!(key.unpack().containing_list_url.is_empty());
            assert_eq!(key.url_string(), "strbo-ref-airable:///item:2");
        }

        #[test]
        fn empty_item_fails() {
            let mut key = LocationKeyReference::new();
            let err = key.set_url("strbo-ref-airable://list/:3").unwrap_err();
            let LocationError::Parsing(e) = err else {
                panic!("expected parsing error");
            };
            assert_eq!(e.component(), "Item");
            assert_eq!(e.message(), "Component empty");
        }

        #[test]
        fn missing_position_fails() {
            let mut key = LocationKeyReference::new();
            let err = key.set_url("strbo-ref-airable://list/item:").unwrap_err();
            let LocationError::Parsing(e) = err else {
                panic!("expected parsing error");
            };
            assert_eq!(e.component(), "Item position");
            assert_eq!(e.message(), "Component empty");
        }

        #[test]
        fn out_of_range_position_fails() {
            let mut key = LocationKeyReference::new();
            let err = key
                .set_url("strbo-ref-airable://list/item:4294967296")
                .unwrap_err();
            let LocationError::Parsing(e) = err else {
                panic!("expected parsing error");
            };
            assert_eq!(e.component(), "Item position");
            assert_eq!(e.message(), "Component out of range");
        }

        #[test]
        fn max_position_is_accepted() {
            let mut key = LocationKeyReference::new();
            assert_eq!(
                key.set_url("strbo-ref-airable://list/item:4294967295"),
                Ok(None)
            );
            assert_eq!(key.unpack().item_position, ObjectIndex::new(u32::MAX));
        }

        #[test]
        fn position_zero_parses_but_is_invalid() {
            let mut key = LocationKeyReference::new();
            assert_eq!(key.set_url("strbo-ref-airable://list/item:0"), Ok(None));
            assert!(!key.is_valid());
            assert_eq!(key.url_string(), "");
        }

        #[test]
        fn set_by_components() {
            let mut key = LocationKeyReference::new();
            key.set_item("radios/france/paris", ObjectIndex::new(4));
            assert!(!key.is_valid());
            key.set_containing_list("radios/france");
            assert!(key.is_valid());
            assert_eq!(
                key.url_string(),
                "strbo-ref-airable://radios%2Ffrance/radios%2Ffrance%2Fparis:4"
            );
        }
    }

    mod trace {
        use super::*;

        #[test]
        fn scheme_is_as_expected() {
            assert_eq!(LocationTrace::new().scheme().name(), "strbo-trace-airable");
        }

        #[test]
        fn url_with_trace_pairs_roundtrips() {
            let expected = "strbo-trace-airable://root/radios:1:radios%2Ffrance:5/radios%2Ffrance%2Fparis:17";
            let mut trace = LocationTrace::new();
            assert_eq!(trace.set_url(expected), Ok(None));
            assert!(trace.is_valid());
            assert_eq!(trace.url_string(), expected);

            let c = trace.unpack();
            assert_eq!(c.reference_point_url, "root");
            assert_eq!(
                c.trace_urls,
                vec![
                    ("radios".to_string(), ObjectIndex::new(1)),
                    ("radios/france".to_string(), ObjectIndex::new(5)),
                ]
            );
            assert_eq!(c.item_url, "radios/france/paris");
            assert_eq!(c.item_position, ObjectIndex::new(17));
            assert_eq!(trace.trace_length(), 3);
        }

        #[test]
        fn url_without_trace_pairs_roundtrips() {
            let expected = "strbo-trace-airable://root/item:3";
            let mut trace = LocationTrace::new();
            assert_eq!(trace.set_url(expected), Ok(None));
            assert!(trace.is_valid());
            assert!(trace.unpack().trace_urls.is_empty());
            assert_eq!(trace.trace_length(), 1);
            assert_eq!(trace.url_string(), expected);
        }

        #[test]
        fn odd_number_of_trace_fields_fails() {
            let mut trace = LocationTrace::new();
            let err = trace
                .set_url("strbo-trace-airable://root/a:1:b/item:2")
                .unwrap_err();
            let LocationError::Parsing(e) = err else {
                panic!("expected parsing error");
            };
            assert_eq!(e.component(), "URL");
            assert_eq!(e.message(), "Odd number of fields in trace");
        }

        #[test]
        fn empty_field_in_trace_fails() {
            let mut trace = LocationTrace::new();
            let err = trace
                .set_url("strbo-trace-airable://root/a::b:2/item:2")
                .unwrap_err();
            let LocationError::Parsing(e) = err else {
                panic!("expected parsing error");
            };
            assert_eq!(e.component(), "URL");
            assert_eq!(e.message(), "Empty field in trace");
        }

        #[test]
        fn empty_trace_segment_fails() {
            let mut trace = LocationTrace::new();
            let err = trace.set_url("strbo-trace-airable://root//item:2").unwrap_err();
            let LocationError::Parsing(e) = err else {
                panic!("expected parsing error");
            };
            assert_eq!(e.component(), "URL");
            assert_eq!(e.message(), "Empty trace");
        }

        #[test]
        fn zero_trace_position_truncates_trace() {
            let mut trace = LocationTrace::new();
            assert_eq!(
                trace.set_url("strbo-trace-airable://root/a:0:b:2/item:5"),
                Ok(None)
            );
            assert!(trace.is_valid());
            assert_eq!(
                trace.unpack().trace_urls,
                vec![("a".to_string(), ObjectIndex::default())]
            );
            assert_eq!(trace.unpack().item_position, ObjectIndex::new(5));
        }

        #[test]
        fn explicit_root_reference_is_normalized_with_warning() {
            let mut trace = LocationTrace::new();
            assert_eq!(
                trace.set_url("strbo-trace-airable://%2F/item:1"),
                Ok(Some(
                    "Airable location trace contains unneeded explicit reference to root"
                ))
            );
            assert!(trace.unpack().reference_point_url.is_empty());
            assert_eq!(trace.url_string(), "strbo-trace-airable:///item:1");
        }

        #[test]
        fn empty_item_fails() {
            let mut trace = LocationTrace::new();
            let err = trace.set_url("strbo-trace-airable://root/a:1/:2").unwrap_err();
            let LocationError::Parsing(e) = err else {
                panic!("expected parsing error");
            };
            assert_eq!(e.component(), "Item");
            assert_eq!(e.message(), "Component empty");
        }

        #[test]
        fn set_by_components() {
            let mut trace = LocationTrace::new();
            trace.set_reference_point("root");
            trace.append_to_trace("radios", ObjectIndex::new(1));
            trace.append_to_trace("radios/france", ObjectIndex::new(5));
            assert!(!trace.is_valid());
            trace.set_item("radios/france/paris", ObjectIndex::new(17));
            assert!(trace.is_valid());

            assert_eq!(
                trace.url_string(),
                "strbo-trace-airable://root/radios:1:radios%2Ffrance:5/radios%2Ffrance%2Fparis:17"
            );
            assert_eq!(trace.trace_length(), 3);
        }

        #[test]
        fn clear_invalidates_trace() {
            let mut trace = LocationTrace::new();
            assert_eq!(trace.set_url("strbo-trace-airable://root/item:3"), Ok(None));
            assert!(trace.is_valid());
            trace.clear();
            assert!(!trace.is_valid());
            assert!(trace.unpack().trace_urls.is_empty());
            assert_eq!(trace.url_string(), "");
        }
    }
}
