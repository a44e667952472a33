//! Location URLs for items on USB mass storage devices.
//!
//! All three shapes share the `<device>:<partition>/` authority prefix. The
//! trace shape folds the path from the reference point down to the item into
//! a single `/`-joined item name instead of storing per-level positions.

use std::fmt;
use std::str::FromStr;

use crate::error::{LocationError, ParsingError};
use crate::field::{require_field, FieldPolicy};
use crate::index::{self, ObjectIndex};
use crate::location::{decode_component, Location};
use crate::percent::url_encode_into;
use crate::scheme::{ReferenceKind, ReferenceScheme, Scheme, SimpleKind, SimpleScheme, TraceKind, TraceScheme};

/// The `strbo-usb` scheme.
pub const SIMPLE_SCHEME: SimpleScheme = Scheme::new("strbo-usb");

/// The `strbo-ref-usb` scheme.
pub const REFERENCE_SCHEME: ReferenceScheme = Scheme::new("strbo-ref-usb");

/// The `strbo-trace-usb` scheme.
pub const TRACE_SCHEME: TraceScheme = Scheme::new("strbo-trace-usb");

const SIMPLE_PREFIX: &str = "Simple USB location key malformed: ";
const REFERENCE_PREFIX: &str = "Reference USB location key malformed: ";
const TRACE_PREFIX: &str = "USB location trace malformed: ";

/// Extracts the `<device>:<partition>/` prefix common to all USB shapes.
///
/// Returns the byte indices of the `:` and `/` separators.
fn extract_device_and_partition(
    url: &str,
    offset: usize,
    error_prefix: &'static str,
) -> Result<(usize, usize), LocationError> {
    let end_of_device = require_field(url, offset, ':', FieldPolicy::MustNotBeEmpty)
        .map_err(|e| ParsingError::new(error_prefix, Some("Device"), e.to_string()))?;

    let end_of_partition = require_field(url, offset, '/', FieldPolicy::MustNotBeEmpty)
        .map_err(|e| ParsingError::new(error_prefix, Some("Partition"), e.to_string()))?;

    if end_of_partition <= end_of_device {
        return Err(
            ParsingError::new(error_prefix, None, "Failed parsing device and partition").into(),
        );
    }

    Ok((end_of_device, end_of_partition))
}

/// Components of a [`LocationKeySimple`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleComponents {
    /// Device name.
    pub device: String,
    /// Partition name on the device.
    pub partition: String,
    /// Path of the item relative to the partition root; may be empty to
    /// address the partition itself.
    pub path: String,
}

/// Simple location key for an item on a USB partition.
///
/// URL shape: `strbo-usb://<device>:<partition>/<path>`.
///
/// # Examples
///
/// ```
/// use strbo_url::usb::LocationKeySimple;
/// use strbo_url::Location;
///
/// let mut key = LocationKeySimple::new();
/// key.set_device("My USB Device");
/// key.set_partition("part1");
/// assert!(!key.is_valid());
///
/// key.set_path("Music/05 - Song.flac");
/// assert!(key.is_valid());
/// assert_eq!(
///     key.url_string(),
///     "strbo-usb://My%20USB%20Device:part1/Music%2F05%20-%20Song.flac"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocationKeySimple {
    components: SimpleComponents,
    is_partition_set: bool,
    is_path_set: bool,
}

impl LocationKeySimple {
    /// Creates an empty, invalid location key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the device name.
    pub fn set_device(&mut self, device: impl Into<String>) {
        self.components.device = device.into();
    }

    /// Sets the partition name.
    pub fn set_partition(&mut self, partition: impl Into<String>) {
        self.components.partition = partition.into();
        self.is_partition_set = true;
    }

    /// Sets the item path.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.components.path = path.into();
        self.is_path_set = true;
    }

    /// Appends one level to the item path, inserting a `/` separator when
    /// the path is non-empty.
    pub fn append_to_path(&mut self, path: &str) {
        if self.components.path.is_empty() {
            self.set_path(path);
        } else {
            self.components.path.push('/');
            self.components.path.push_str(path);
        }
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
        self.is_partition_set = false;
        self.is_path_set = false;
    }

    fn is_valid(&self) -> bool {
        self.is_partition_set && self.is_path_set && !self.components.device.is_empty()
    }

    fn error_prefix(&self) -> &'static str {
        SIMPLE_PREFIX
    }

    fn render_url(&self) -> String {
        let mut url = String::from(SIMPLE_SCHEME.name());
        url.push_str("://");
        url_encode_into(&mut url, &self.components.device);
        url.push(':');
        url_encode_into(&mut url, &self.components.partition);
        url.push('/');
        url_encode_into(&mut url, &self.components.path);
        url
    }

    fn set_url_fields(
        &mut self,
        url: &str,
        offset: usize,
    ) -> Result<Option<&'static str>, LocationError> {
        let (end_of_device, end_of_partition) =
            extract_device_and_partition(url, offset, SIMPLE_PREFIX)?;

        let device = decode_component(&url[offset..end_of_device], SIMPLE_PREFIX, Some("Device"))?;
        let partition = decode_component(
            &url[end_of_device + 1..end_of_partition],
            SIMPLE_PREFIX,
            Some("Partition"),
        )?;
        let path =
            decode_component(&url[end_of_partition + 1..], SIMPLE_PREFIX, Some("Item name"))?;

        self.components = SimpleComponents {
            device,
            partition,
            path,
        };
        self.is_partition_set = true;
        self.is_path_set = true;

        Ok(None)
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
    /// Device name.
    pub device: String,
    /// Partition name on the device.
    pub partition: String,
    /// Path of the list containing the item; empty means the partition root.
    pub reference_point: String,
    /// Name of the item inside the containing list, without any path
    /// separator.
    pub item_name: String,
    /// 1-based position of the item in the containing list.
    pub item_position: ObjectIndex,
}

/// Reference location key for an item on a USB partition.
///
/// URL shape:
/// `strbo-ref-usb://<device>:<partition>/<reference>/<item>:<position>`.
/// The item name must be a single path component; an embedded `/` makes the
/// location invalid and is rejected by the parser.
#[derive(Debug, Clone, Default)]
pub struct LocationKeyReference {
    components: ReferenceComponents,
    is_partition_set: bool,
    is_reference_point_set: bool,
    is_item_set: bool,
}

impl LocationKeyReference {
    /// Creates an empty, invalid location key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the device name.
    pub fn set_device(&mut self, device: impl Into<String>) {
        self.components.device = device.into();
    }

    /// Sets the partition name.
    pub fn set_partition(&mut self, partition: impl Into<String>) {
        self.components.partition = partition.into();
        self.is_partition_set = true;
    }

    /// Sets the path of the containing list.
    pub fn set_reference_point(&mut self, reference_point: impl Into<String>) {
        self.components.reference_point = reference_point.into();
        self.is_reference_point_set = true;
    }

    /// Appends one level to the reference point path.
    pub fn append_to_reference_point(&mut self, path: &str) {
        if self.components.reference_point.is_empty() {
            self.set_reference_point(path);
        } else {
            self.components.reference_point.push('/');
            self.components.reference_point.push_str(path);
        }
    }

    /// Sets the item name and its position in the containing list.
    pub fn set_item(&mut self, item_name: impl Into<String>, item_position: ObjectIndex) {
        self.components.item_name = item_name.into();
        self.components.item_position = item_position;
        self.is_item_set = true;
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
        self.is_partition_set = false;
        self.is_reference_point_set = false;
        self.is_item_set = false;
    }

    fn is_valid(&self) -> bool {
        self.is_partition_set
            && self.is_reference_point_set
            && self.is_item_set
            && !self.components.device.is_empty()
            && !self.components.item_name.contains('/')
            && self.components.item_position.is_valid()
    }

    fn error_prefix(&self) -> &'static str {
        REFERENCE_PREFIX
    }

    fn render_url(&self) -> String {
        let mut url = String::from(REFERENCE_SCHEME.name());
        url.push_str("://");
        url_encode_into(&mut url, &self.components.device);
        url.push(':');
        url_encode_into(&mut url, &self.components.partition);
        url.push('/');
        url_encode_into(&mut url, &self.components.reference_point);
        url.push('/');
        url_encode_into(&mut url, &self.components.item_name);
        url.push(':');
        url.push_str(&self.components.item_position.get().to_string());
        url
    }

    fn set_url_fields(
        &mut self,
        url: &str,
        offset: usize,
    ) -> Result<Option<&'static str>, LocationError> {
        let (end_of_device, end_of_partition) =
            extract_device_and_partition(url, offset, REFERENCE_PREFIX)?;

        let end_of_reference =
            require_field(url, end_of_partition + 1, '/', FieldPolicy::MayBeEmpty).map_err(|e| {
                ParsingError::new(REFERENCE_PREFIX, Some("Reference point"), e.to_string())
            })?;

        let is_reference_empty = end_of_reference == end_of_partition + 1;

        let item_policy = if is_reference_empty {
            FieldPolicy::MayBeEmpty
        } else {
            FieldPolicy::MustNotBeEmpty
        };
        let end_of_item = require_field(url, end_of_reference + 1, ':', item_policy)
            .map_err(|e| ParsingError::new(REFERENCE_PREFIX, Some("Item name"), e.to_string()))?;

        let item_position = index::item_position(url, end_of_item + 1)
            .map_err(|e| ParsingError::new(REFERENCE_PREFIX, Some("Item position"), e.to_string()))?;

        let item_name = decode_component(
            &url[end_of_reference + 1..end_of_item],
            REFERENCE_PREFIX,
            Some("Item component"),
        )?;

        if item_name.contains('/') {
            return Err(ParsingError::new(
                REFERENCE_PREFIX,
                Some("Item component"),
                "Component is a path",
            )
            .into());
        }

        let device =
            decode_component(&url[offset..end_of_device], REFERENCE_PREFIX, Some("Device"))?;
        let partition = decode_component(
            &url[end_of_device + 1..end_of_partition],
            REFERENCE_PREFIX,
            Some("Partition"),
        )?;
        let reference_point = decode_component(
            &url[end_of_partition + 1..end_of_reference],
            REFERENCE_PREFIX,
            Some("Reference point"),
        )?;

        self.components = ReferenceComponents {
            device,
            partition,
            reference_point,
            item_name,
            item_position,
        };
        self.is_partition_set = true;
        self.is_reference_point_set = true;
        self.is_item_set = true;

        Ok(None)
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
    /// Device name.
    pub device: String,
    /// Partition name on the device.
    pub partition: String,
    /// Path of the reference point; empty means the partition root.
    pub reference_point: String,
    /// `/`-joined path from the reference point down to the item.
    pub item_name: String,
    /// 1-based position of the item in its immediate parent list.
    pub item_position: ObjectIndex,
}

/// Location trace for an item on a USB partition.
///
/// URL shape:
/// `strbo-trace-usb://<device>:<partition>/[<reference>/]<item-path>:<position>`.
/// Intermediate levels are folded into the `/`-joined item path; only the
/// terminal item carries a position.
#[derive(Debug, Clone, Default)]
pub struct LocationTrace {
    components: TraceComponents,
    is_partition_set: bool,
    is_item_set: bool,
}

impl LocationTrace {
    /// Creates an empty, invalid location trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of levels between the reference point and the item,
    /// including the item itself; 0 when the item path is empty.
    #[must_use]
    pub fn trace_length(&self) -> usize {
        if self.components.item_name.is_empty() {
            0
        } else {
            1 + self.components.item_name.matches('/').count()
        }
    }

    /// Sets the device name.
    pub fn set_device(&mut self, device: impl Into<String>) {
        self.components.device = device.into();
    }

    /// Sets the partition name.
    pub fn set_partition(&mut self, partition: impl Into<String>) {
        self.components.partition = partition.into();
        self.is_partition_set = true;
    }

    /// Sets the reference point path.
    ///
    /// An explicit root reference (`"/"`) is redundant and stored as the
    /// empty path.
    pub fn set_reference_point(&mut self, reference_point: impl Into<String>) {
        let reference_point = reference_point.into();

        if reference_point == "/" {
            self.components.reference_point.clear();
        } else {
            self.components.reference_point = reference_point;
        }
    }

    /// Appends one level to the reference point path.
    pub fn append_to_reference_point(&mut self, path: &str) {
        if self.components.reference_point.is_empty() {
            self.set_reference_point(path);
        } else {
            self.components.reference_point.push('/');
            self.components.reference_point.push_str(path);
        }
    }

    /// Sets the item path and position, replacing any previous item.
    pub fn set_item(&mut self, item_name: impl Into<String>, item_position: ObjectIndex) {
        self.components.item_name = item_name.into();
        self.components.item_position = item_position;
        self.is_item_set = true;
    }

    /// Appends the terminal item to the item path and records its position.
    ///
    /// Does nothing when the item has already been set.
    pub fn append_item(&mut self, item_name: &str, item_position: ObjectIndex) {
        if self.is_item_set {
            return;
        }

        if !self.components.item_name.is_empty() {
            self.components.item_name.push('/');
        }

        self.components.item_name.push_str(item_name);
        self.components.item_position = item_position;
        self.is_item_set = true;
    }

    /// Appends one intermediate level to the item path.
    ///
    /// Does nothing when the item has already been set.
    pub fn append_to_item_path(&mut self, path: &str) {
        if self.is_item_set {
            return;
        }

        if self.components.item_name.is_empty() {
            self.components.item_name = path.to_string();
        } else {
            self.components.item_name.push('/');
            self.components.item_name.push_str(path);
        }
    }

    /// Read-only view of the underlying components.
    #[must_use]
    pub fn unpack(&self) -> &TraceComponents {
        &self.components
    }
}

impl Location for LocationTrace {
    type Kind = TraceKind;

    fn scheme(&self) -> &TraceScheme {
        &TRACE_SCHEME
    }

    fn clear(&mut self) {
        self.components = TraceComponents::default();
        self.is_partition_set = false;
        self.is_item_set = false;
    }

    fn is_valid(&self) -> bool {
        self.is_partition_set
            && self.is_item_set
            && !self.components.device.is_empty()
            && self.components.item_position.is_valid()
    }

    fn error_prefix(&self) -> &'static str {
        TRACE_PREFIX
    }

    fn render_url(&self) -> String {
        let mut url = String::from(TRACE_SCHEME.name());
        url.push_str("://");
        url_encode_into(&mut url, &self.components.device);
        url.push(':');
        url_encode_into(&mut url, &self.components.partition);
        url.push('/');

        if !self.components.reference_point.is_empty() {
            url_encode_into(&mut url, &self.components.reference_point);
            url.push('/');
        }

        url_encode_into(&mut url, &self.components.item_name);
        url.push(':');
        url.push_str(&self.components.item_position.get().to_string());
        url
    }

    fn set_url_fields(
        &mut self,
        url: &str,
        offset: usize,
    ) -> Result<Option<&'static str>, LocationError> {
        let (end_of_device, end_of_partition) =
            extract_device_and_partition(url, offset, TRACE_PREFIX)?;

        let end_of_reference = if url[end_of_partition + 1..].contains('/') {
            require_field(url, end_of_partition + 1, '/', FieldPolicy::MayBeEmpty).map_err(|e| {
                ParsingError::new(TRACE_PREFIX, Some("Reference point"), e.to_string())
            })?
        } else {
            end_of_partition
        };

        let is_reference_empty = end_of_reference == end_of_partition;

        let item_policy = if is_reference_empty {
            FieldPolicy::MayBeEmpty
        } else {
            FieldPolicy::MustNotBeEmpty
        };
        let end_of_item = require_field(url, end_of_reference + 1, ':', item_policy)
            .map_err(|e| ParsingError::new(TRACE_PREFIX, Some("Item name"), e.to_string()))?;

        let item_position = index::item_position(url, end_of_item + 1)
            .map_err(|e| ParsingError::new(TRACE_PREFIX, Some("Item position"), e.to_string()))?;

        let device = decode_component(&url[offset..end_of_device], TRACE_PREFIX, Some("Device"))?;
        let partition = decode_component(
            &url[end_of_device + 1..end_of_partition],
            TRACE_PREFIX,
            Some("Partition"),
        )?;

        let mut reference_point = if end_of_partition < end_of_reference {
            decode_component(
                &url[end_of_partition + 1..end_of_reference],
                TRACE_PREFIX,
                Some("Reference point"),
            )?
        } else {
            String::new()
        };

        let item_name = decode_component(
            &url[end_of_reference + 1..end_of_item],
            TRACE_PREFIX,
            Some("Item name"),
        )?;

        let warning = if reference_point == "/" {
            reference_point.clear();
            Some("USB location trace contains unneeded explicit reference to root")
        } else {
            None
        };

        self.components = TraceComponents {
            device,
            partition,
            reference_point,
            item_name,
            item_position,
        };
        self.is_partition_set = true;
        self.is_item_set = true;

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
