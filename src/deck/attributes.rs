//! Attribute authorization and override resolution
//!
//!     Every box kind owns a fixed, closed set of legal attribute keys. Authorization is a
//!     static lookup: a key outside the set is an error, never silently dropped, so `bold`
//!     on an image is caught instead of vanishing.
//!
//!     Attributes travel through the core as one ordered key → value structure,
//!     [`AttributeMap`]. Building it from a box's attribute list and overriding it with a
//!     call site's attributes are both the same operation: insert by key, last write wins.
//!
//! Merging at call sites
//!
//!     Instantiating a component computes the effective attributes of its root box: the
//!     declared attributes, overwritten key by key by the call site. When the root is itself
//!     a call site the merge recurses until it reaches a container or terminal, whose kind
//!     tags the result. See [merge](merge).
//!
//! ## Modules
//!
//! - `kind` - box kinds and their authorized keys
//! - `rules` - value rules per key (ranges, enumerations)
//! - `map` - the ordered attribute map
//! - `merge` - effective attributes for call sites

pub mod kind;
pub mod map;
pub mod merge;
pub mod rules;

pub use kind::AttributeKind;
pub use map::AttributeMap;
pub use merge::{effective_attributes, merge, root_kind};
pub use rules::{check_value, parse_percentage, ValueRule};
