//! Map variants built by composition over [`std::collections::HashMap`].
//!
//! - [`DefaultMap`]: returns a fallback for missing keys without storing it
//! - [`WeakRefMap`]: holds values through weak references, so entries vanish
//!   once their owners drop them
//!
//! # Reference Counting
//!
//! [`WeakRefMap`] pairs with [`Strong`], which is `std::rc::Rc` by default and
//! `std::sync::Arc` with the `arc` feature.
//!
//! # Examples
//!
//! ```rust
//! use utilkit::map::{DefaultMap, Strong, WeakRefMap};
//!
//! let mut counts: DefaultMap<&str, usize> = DefaultMap::with_value(0);
//! counts.insert("seen", 3);
//! assert_eq!(*counts.get(&"seen"), 3);
//! assert_eq!(*counts.get(&"missing"), 0);
//! assert!(!counts.contains_key(&"missing"));
//!
//! let mut cache = WeakRefMap::new();
//! let owner = Strong::new(String::from("payload"));
//! cache.insert(1, &owner);
//! assert!(cache.contains_key(&1));
//! drop(owner);
//! assert!(!cache.contains_key(&1));
//! ```

mod default_map;
mod weak_ref_map;

pub use default_map::{DefaultMap, DefaultPolicy, DefaultValue};
pub use weak_ref_map::{Iter, Keys, Values, WeakRefMap};

/// Strong reference type paired with [`WeakRefMap`].
///
/// `std::sync::Arc` when the `arc` feature is enabled.
#[cfg(feature = "arc")]
pub type Strong<T> = std::sync::Arc<T>;

/// Strong reference type paired with [`WeakRefMap`].
///
/// `std::rc::Rc` when the `arc` feature is disabled (default).
#[cfg(not(feature = "arc"))]
pub type Strong<T> = std::rc::Rc<T>;

#[cfg(feature = "arc")]
pub(crate) type WeakReference<T> = std::sync::Weak<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type WeakReference<T> = std::rc::Weak<T>;
