//! Error types.
//!
//! The only recoverable failure in this crate is naming a value kind by an
//! unknown selector character. Empty or absent inputs are not errors: they
//! produce `None` or leave the input untouched.

/// Represents an error when a character does not name any [`ValueKind`].
///
/// [`ValueKind`]: crate::value::ValueKind
///
/// # Examples
///
/// ```rust
/// use tagdeque::error::UnknownSelectorError;
///
/// let error = UnknownSelectorError { selector: 'x' };
/// assert_eq!(
///     format!("{}", error),
///     "invalid value selector 'x': expected one of b, d, f, i, q, s, t"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownSelectorError {
    /// The character that was rejected.
    pub selector: char,
}

impl std::fmt::Display for UnknownSelectorError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "invalid value selector '{}': expected one of b, d, f, i, q, s, t",
            self.selector
        )
    }
}

impl std::error::Error for UnknownSelectorError {}
