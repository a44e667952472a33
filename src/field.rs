//! Delimiter-based field extraction.

use crate::error::FieldError;

/// Presence policy for a delimiter-bound field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPolicy {
    /// A missing separator is acceptable; the field may be absent entirely.
    Optional,
    /// The separator must be present, but the field in front of it may be
    /// empty.
    MayBeEmpty,
    /// The separator must be present and the field must be non-empty.
    MustNotBeEmpty,
}

/// Locates the end of the field that starts at byte offset `offset`.
///
/// Returns the absolute byte index of `separator`, or `Ok(None)` when the
/// separator is absent and the policy permits that. Callers take the field
/// as `url[offset..end]` and continue past `end + 1`.
///
/// # Errors
///
/// [`FieldError::SeparatorNotFound`] when a required separator is missing,
/// [`FieldError::ComponentEmpty`] when a `MustNotBeEmpty` field is empty.
pub fn extract_field(
    url: &str,
    offset: usize,
    separator: char,
    policy: FieldPolicy,
) -> Result<Option<usize>, FieldError> {
    let end = url
        .get(offset..)
        .and_then(|rest| rest.find(separator))
        .map(|pos| offset + pos);

    match end {
        None => match policy {
            FieldPolicy::Optional => Ok(None),
            FieldPolicy::MayBeEmpty | FieldPolicy::MustNotBeEmpty => {
                Err(FieldError::SeparatorNotFound { separator })
            }
        },
        Some(end) => {
            if policy == FieldPolicy::MustNotBeEmpty && end <= offset {
                return Err(FieldError::ComponentEmpty);
            }

            Ok(Some(end))
        }
    }
}

/// [`extract_field`] for the two policies that require the separator.
pub(crate) fn require_field(
    url: &str,
    offset: usize,
    separator: char,
    policy: FieldPolicy,
) -> Result<usize, FieldError> {
    match extract_field(url, offset, separator, policy)? {
        Some(end) => Ok(end),
        None => Err(FieldError::SeparatorNotFound { separator }),
    }
}
