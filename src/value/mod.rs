//! Tagged dynamic values.
//!
//! [`Value`] holds exactly one of a closed set of shapes:
//!
//! - [`Value::Boolean`]: a truth value
//! - [`Value::Number`]: an integer or real, with a null flag kept apart from
//!   the subkind
//! - [`Value::Text`]: nullable character data
//! - [`Value::Symbol`]: a name bound to an optional shared value
//! - [`Value::Queue`]: a [`Deque`] of shared values, owned by the value
//!
//! Every variant has its own constructor taking exactly the payload it needs.
//! Values expose no mutators; build a new one instead.
//!
//! # Examples
//!
//! ```rust
//! use tagdeque::ReferenceCounter;
//! use tagdeque::value::{Value, ValueKind};
//!
//! let answer = Value::integer(42, false);
//! let unknown = Value::real(0.0, true);
//! let binding = Value::symbol(Some("answer"), Some(ReferenceCounter::new(answer.clone())));
//!
//! assert_eq!(answer.kind(), ValueKind::Integer);
//! assert!(unknown.is_null());
//! assert_eq!(binding.to_string(), "answer=42");
//! ```

mod kind;
mod number;
mod text;

pub use kind::ValueKind;
pub use number::Number;
pub use number::NumberKind;
pub use text::Symbol;
pub use text::Text;

use std::fmt;

use crate::ReferenceCounter;
use crate::deque::{self, Deque};

/// A dynamically typed value.
///
/// See the [module documentation](self) for the variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A truth value.
    Boolean(bool),
    /// A nullable integer or real.
    Number(Number),
    /// Nullable character data.
    Text(Text),
    /// A name bound to an optional value.
    Symbol(Symbol),
    /// An owned queue whose elements are shared values.
    Queue(Deque<ReferenceCounter<Self>>),
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Value: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Value: Send, Sync);

impl Value {
    /// Creates a boolean value.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    /// Creates an integer value, null if `is_null` is set.
    #[must_use]
    pub const fn integer(value: i64, is_null: bool) -> Self {
        Self::Number(Number::integer(value, is_null))
    }

    /// Creates a real value, null if `is_null` is set.
    #[must_use]
    pub const fn real(value: f64, is_null: bool) -> Self {
        Self::Number(Number::real(value, is_null))
    }

    /// Creates a text value.
    ///
    /// The text is null if `is_null` is set or `value` is absent.
    #[must_use]
    pub fn text(value: Option<&str>, is_null: bool) -> Self {
        Self::Text(Text::new(value, is_null))
    }

    /// Creates a symbol value. An absent name becomes the empty string.
    #[must_use]
    pub fn symbol(name: Option<&str>, value: Option<ReferenceCounter<Self>>) -> Self {
        Self::Symbol(Symbol::new(name, value))
    }

    /// Creates a queue value holding a shallow copy of `queue`.
    ///
    /// The value never takes over the caller's deque: its elements are shared
    /// with `queue`, but later pushes and pops on either side are not seen by
    /// the other. An absent `queue` gives an empty queue.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagdeque::ReferenceCounter;
    /// use tagdeque::deque::Deque;
    /// use tagdeque::value::Value;
    ///
    /// let mut source: Deque<ReferenceCounter<Value>> = Deque::new();
    /// source.push_right(ReferenceCounter::new(Value::boolean(true)));
    ///
    /// let value = Value::queue(Some(&source));
    /// source.pop_left();
    ///
    /// assert_eq!(value.as_queue().map(Deque::len), Some(1));
    /// assert_eq!(Value::queue(None).as_queue().map(Deque::len), Some(0));
    /// ```
    #[must_use]
    pub fn queue(queue: Option<&Deque<ReferenceCounter<Self>>>) -> Self {
        Self::Queue(deque::copy(queue))
    }

    /// Creates the null value of `kind`.
    ///
    /// Numbers and text come out null. Kinds without a null flag come out
    /// as their empty form: `false`, a nameless unbound symbol, or an empty
    /// queue.
    #[must_use]
    pub fn null_of(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Boolean => Self::boolean(false),
            ValueKind::Integer => Self::integer(0, true),
            ValueKind::Real => Self::real(0.0, true),
            ValueKind::Text => Self::text(None, true),
            ValueKind::Symbol => Self::symbol(None, None),
            ValueKind::Queue => Self::queue(None),
        }
    }

    /// Returns the kind of this value, numbers split by subkind.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Number(number) => match number.kind() {
                NumberKind::Integer => ValueKind::Integer,
                NumberKind::Real => ValueKind::Real,
            },
            Self::Text(_) => ValueKind::Text,
            Self::Symbol(_) => ValueKind::Symbol,
            Self::Queue(_) => ValueKind::Queue,
        }
    }

    /// Returns `true` for null numbers and null text.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        match self {
            Self::Number(number) => number.is_null(),
            Self::Text(text) => text.is_null(),
            Self::Boolean(_) | Self::Symbol(_) | Self::Queue(_) => false,
        }
    }

    /// Returns the boolean, if this is a boolean value.
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the number, if this is a number value.
    #[must_use]
    pub const fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(number) => Some(number),
            _ => None,
        }
    }

    /// Returns the text, if this is a text value.
    #[must_use]
    pub const fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the symbol, if this is a symbol value.
    #[must_use]
    pub const fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Returns the queue, if this is a queue value.
    #[must_use]
    pub const fn as_queue(&self) -> Option<&Deque<ReferenceCounter<Self>>> {
        match self {
            Self::Queue(queue) => Some(queue),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::integer(value, false)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::real(value, false)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::text(Some(value), false)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(value) => write!(formatter, "{value}"),
            Self::Number(number) => write!(formatter, "{number}"),
            Self::Text(text) => write!(formatter, "{text}"),
            Self::Symbol(symbol) => write!(formatter, "{symbol}"),
            Self::Queue(queue) => write!(formatter, "{queue}"),
        }
    }
}
