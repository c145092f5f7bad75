use std::fmt;

/// The numeric subkind of a [`Number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// A signed integer.
    Integer,
    /// A floating-point number.
    Real,
}

#[derive(Debug, Clone, Copy)]
enum Numeric {
    Integer(i64),
    Real(f64),
}

/// A number that keeps its subkind even when null.
///
/// A null integer and a null real are different values, and neither equals
/// a non-null number of its own subkind. The magnitude stored alongside a
/// null number is not observable.
///
/// # Examples
///
/// ```rust
/// use tagdeque::value::{Number, NumberKind};
///
/// let five = Number::integer(5, false);
/// assert_eq!(five.kind(), NumberKind::Integer);
/// assert_eq!(five.as_integer(), Some(5));
///
/// let missing = Number::integer(5, true);
/// assert!(missing.is_null());
/// assert_eq!(missing.kind(), NumberKind::Integer);
/// assert_eq!(missing.as_integer(), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Number {
    numeric: Numeric,
    is_null: bool,
}

impl Number {
    /// Creates an integer, null if `is_null` is set.
    #[must_use]
    pub const fn integer(value: i64, is_null: bool) -> Self {
        Self {
            numeric: Numeric::Integer(value),
            is_null,
        }
    }

    /// Creates a real, null if `is_null` is set.
    #[must_use]
    pub const fn real(value: f64, is_null: bool) -> Self {
        Self {
            numeric: Numeric::Real(value),
            is_null,
        }
    }

    /// Returns the numeric subkind, regardless of nullness.
    #[must_use]
    pub const fn kind(&self) -> NumberKind {
        match self.numeric {
            Numeric::Integer(_) => NumberKind::Integer,
            Numeric::Real(_) => NumberKind::Real,
        }
    }

    /// Returns `true` if the number is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.is_null
    }

    /// Returns the integer, or `None` if null or real.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self.numeric {
            Numeric::Integer(value) if !self.is_null => Some(value),
            _ => None,
        }
    }

    /// Returns the real, or `None` if null or integer.
    #[must_use]
    pub const fn as_real(&self) -> Option<f64> {
        match self.numeric {
            Numeric::Real(value) if !self.is_null => Some(value),
            _ => None,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        if self.kind() != other.kind() || self.is_null != other.is_null {
            return false;
        }
        match (self.numeric, other.numeric) {
            _ if self.is_null => true,
            (Numeric::Integer(left), Numeric::Integer(right)) => left == right,
            (Numeric::Real(left), Numeric::Real(right)) => left == right,
            _ => false,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.numeric {
            _ if self.is_null => formatter.write_str("null"),
            Numeric::Integer(value) => write!(formatter, "{value}"),
            Numeric::Real(value) => write!(formatter, "{value}"),
        }
    }
}
