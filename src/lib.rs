//! # tagdeque
//!
//! A double-ended queue and a tagged dynamic value built on top of it.
//!
//! ## Overview
//!
//! - **Deque**: a doubly-linked queue with O(1) push, pop and peek at either
//!   end, shallow or deep copy, and in-place reversal.
//! - **Value**: a closed set of variants (boolean, integer, real, text,
//!   symbol, queue) where numbers and text carry a null flag independent of
//!   their kind.
//!
//! ## Feature Flags
//!
//! - `deque`: The [`deque`] module
//! - `value`: The [`value`] module (implies `deque`)
//! - `serde`: `Serialize`/`Deserialize` for `Deque<T>`
//! - `arc`: Use `Arc` instead of `Rc` for [`ReferenceCounter`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use tagdeque::prelude::*;
//!
//! let mut items: Deque<ReferenceCounter<Value>> = Deque::new();
//! items.push_right(ReferenceCounter::new(Value::integer(1, false)));
//! items.push_right(ReferenceCounter::new(Value::text(Some("two"), false)));
//!
//! let value = Value::queue(Some(&items));
//! items.pop_left();
//!
//! assert_eq!(value.as_queue().map(Deque::len), Some(2));
//! assert_eq!(value.to_string(), "[1, \"two\"]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use tagdeque::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ReferenceCounter;
    pub use crate::error::*;

    #[cfg(feature = "deque")]
    pub use crate::deque::{Deque, DequeIntoIterator, DequeIterator};

    #[cfg(feature = "value")]
    pub use crate::value::*;
}

/// Reference-counted smart pointer type used for shared elements.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(not(feature = "arc"))]
pub type ReferenceCounter<T> = std::rc::Rc<T>;

/// `Arc`-backed variant, selected by the `arc` feature.
#[cfg(feature = "arc")]
pub type ReferenceCounter<T> = std::sync::Arc<T>;

pub mod error;

#[cfg(feature = "deque")]
pub mod deque;

#[cfg(feature = "value")]
pub mod value;
