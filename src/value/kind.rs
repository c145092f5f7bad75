use std::fmt;

use crate::error::UnknownSelectorError;

/// The kind of a [`Value`](super::Value), with numbers split by subkind.
///
/// Each kind has a one-character selector, accepted through
/// [`TryFrom<char>`]:
///
/// | Selector | Kind |
/// |----------|------|
/// | `b` | `Boolean` |
/// | `d`, `f` | `Real` |
/// | `i` | `Integer` |
/// | `q` | `Queue` |
/// | `s` | `Symbol` |
/// | `t` | `Text` |
///
/// # Examples
///
/// ```rust
/// use tagdeque::value::ValueKind;
///
/// assert_eq!(ValueKind::try_from('f'), Ok(ValueKind::Real));
/// assert_eq!(ValueKind::Real.selector(), 'd');
/// assert!(ValueKind::try_from('x').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A truth value.
    Boolean,
    /// A nullable signed integer.
    Integer,
    /// A nullable floating-point number.
    Real,
    /// Nullable character data.
    Text,
    /// A name bound to an optional value.
    Symbol,
    /// A queue of shared values.
    Queue,
}

impl ValueKind {
    /// Every kind, in selector order.
    pub const ALL: [Self; 6] = [
        Self::Boolean,
        Self::Real,
        Self::Integer,
        Self::Queue,
        Self::Symbol,
        Self::Text,
    ];

    /// Returns the canonical selector character for this kind.
    #[must_use]
    pub const fn selector(self) -> char {
        match self {
            Self::Boolean => 'b',
            Self::Integer => 'i',
            Self::Real => 'd',
            Self::Text => 't',
            Self::Symbol => 's',
            Self::Queue => 'q',
        }
    }

    /// Returns `true` for the kinds whose null flag is honoured.
    #[must_use]
    pub const fn is_nullable(self) -> bool {
        matches!(self, Self::Integer | Self::Real | Self::Text)
    }
}

impl TryFrom<char> for ValueKind {
    type Error = UnknownSelectorError;

    fn try_from(selector: char) -> Result<Self, Self::Error> {
        match selector {
            'b' => Ok(Self::Boolean),
            'd' | 'f' => Ok(Self::Real),
            'i' => Ok(Self::Integer),
            'q' => Ok(Self::Queue),
            's' => Ok(Self::Symbol),
            't' => Ok(Self::Text),
            _ => Err(UnknownSelectorError { selector }),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Real => "real",
            Self::Text => "text",
            Self::Symbol => "symbol",
            Self::Queue => "queue",
        };
        formatter.write_str(name)
    }
}
