//! Scheme names as typed, process-lifetime constants.

use std::fmt;
use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// Marker trait for the locator shapes a scheme can take.
///
/// The set of shapes is closed; the trait exists only to bind a scheme name
/// to its shape at the type level.
pub trait LocatorKind: sealed::Sealed {}

/// Marker for schemes that address one item directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleKind {}

/// Marker for schemes that address an item through its containing list and
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {}

/// Marker for schemes that address an item through a full path of
/// (name, position) pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {}

impl sealed::Sealed for SimpleKind {}
impl sealed::Sealed for ReferenceKind {}
impl sealed::Sealed for TraceKind {}

impl LocatorKind for SimpleKind {}
impl LocatorKind for ReferenceKind {}
impl LocatorKind for TraceKind {}

/// A URL scheme bound to a locator shape.
///
/// Each concrete scheme is a `const` created once and never mutated, so a
/// location type referring to it can be freely shared across threads. The
/// shape parameter keeps schemes of different shapes apart at compile time:
/// a simple-key location cannot be constructed over a trace scheme.
///
/// # Examples
///
/// ```
/// use strbo_url::{Scheme, SimpleKind};
///
/// const SCHEME: Scheme<SimpleKind> = Scheme::new("testing-simple");
///
/// assert_eq!(SCHEME.name(), "testing-simple");
/// assert!(SCHEME.matches("testing-simple://hello.world"));
/// assert!(!SCHEME.matches("testing-simple:/"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheme<K: LocatorKind> {
    name: &'static str,
    _kind: PhantomData<K>,
}

impl<K: LocatorKind> Scheme<K> {
    /// Binds a scheme name to the locator shape `K`.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _kind: PhantomData,
        }
    }

    /// The scheme name without the `://` suffix.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true iff `url` begins with `<name>://`.
    ///
    /// A pure prefix check; nothing after the separator is inspected.
    #[must_use]
    pub fn matches(&self, url: &str) -> bool {
        url.strip_prefix(self.name)
            .is_some_and(|rest| rest.starts_with("://"))
    }
}

impl<K: LocatorKind> fmt::Display for Scheme<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Scheme for simple location keys.
pub type SimpleScheme = Scheme<SimpleKind>;

/// Scheme for reference location keys.
pub type ReferenceScheme = Scheme<ReferenceKind>;

/// Scheme for location traces.
pub type TraceScheme = Scheme<TraceKind>;
