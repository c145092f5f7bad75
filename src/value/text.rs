use std::fmt;

use super::Value;
use crate::ReferenceCounter;

/// Nullable character data with a byte length fixed at construction.
///
/// # Examples
///
/// ```rust
/// use tagdeque::value::Text;
///
/// let greeting = Text::new(Some("héllo"), false);
/// assert_eq!(greeting.len(), 6);
/// assert_eq!(greeting.as_str(), Some("héllo"));
///
/// let missing = Text::new(None, false);
/// assert!(missing.is_null());
/// assert_eq!(missing.len(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text {
    content: String,
    is_null: bool,
}

impl Text {
    /// Creates text from `value`.
    ///
    /// The result is null if `is_null` is set or `value` is absent; a null
    /// text stores nothing and has length 0.
    #[must_use]
    pub fn new(value: Option<&str>, is_null: bool) -> Self {
        match value {
            Some(content) if !is_null => Self {
                content: content.to_owned(),
                is_null: false,
            },
            _ => Self {
                content: String::new(),
                is_null: true,
            },
        }
    }

    /// Returns `true` if the text is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.is_null
    }

    /// Returns the character data, or `None` if null.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        (!self.is_null).then_some(self.content.as_str())
    }

    /// Returns the length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` if the text holds no bytes. Null text is always empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null {
            formatter.write_str("null")
        } else {
            write!(formatter, "{:?}", self.content)
        }
    }
}

/// A name bound to an optional shared [`Value`].
///
/// An absent name is stored as the empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    name: String,
    value: Option<ReferenceCounter<Value>>,
}

impl Symbol {
    /// Creates a symbol named `name` bound to `value`.
    #[must_use]
    pub fn new(name: Option<&str>, value: Option<ReferenceCounter<Value>>) -> Self {
        Self {
            name: name.unwrap_or_default().to_owned(),
            value,
        }
    }

    /// Returns the symbol's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the bound value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&ReferenceCounter<Value>> {
        self.value.as_ref()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(formatter, "{}={value}", self.name),
            None => formatter.write_str(&self.name),
        }
    }
}
