//! Serialize bit-flag sets as ordered lists of flag names.
//!
//! A flag value like `Permissions::READ | Permissions::WRITE` is usually
//! persisted as a raw integer, which is unreadable in logs and brittle when
//! bit assignments change. This crate generates serde impls that write the
//! value as the sequence of its flag *names* instead, derived from the
//! constants the type declares:
//!
//! ```
//! use flagwire::flag_names;
//!
//! flagwire::flag_set! {
//!     /// What a session is allowed to do.
//!     pub struct Permissions(u8);
//! }
//!
//! #[flag_names]
//! impl Permissions {
//!     pub const READ: Permissions = Permissions(1 << 0);
//!     pub const WRITE: Permissions = Permissions(1 << 1);
//!     pub const EXECUTE: Permissions = Permissions(1 << 2);
//!     pub const ALL: Permissions = Permissions(0b111);
//! }
//!
//! let value = Permissions::READ | Permissions::EXECUTE;
//! let wire = serde_json::to_string(&value).unwrap();
//! assert_eq!(wire, r#"["READ","EXECUTE"]"#);
//! assert_eq!(serde_json::from_str::<Permissions>(&wire).unwrap(), value);
//!
//! // The aggregate constant collapses to its single name.
//! assert_eq!(serde_json::to_string(&Permissions::ALL).unwrap(), r#"["ALL"]"#);
//! ```
//!
// Proc-macro crates cannot export anything but macros, so the attribute lives
// in `flagwire_macros` and is re-exported here; users depend on this one
// crate for the macro, the `FlagSet` capability, and the `flag_set!` helper.

/// Attribute macro generating the name-list serde impls for a bit-flag-set
/// type. See the crate docs for the declaration shape it expects.
pub use flagwire_macros::flag_names;

#[doc(hidden)]
pub use serde;

mod flag_set;

/// Capability surface the generated code needs from a flag type.
///
/// `flag_set!` implements this for the structs it defines; hand-rolled flag
/// types implement it directly. `PartialEq` is required so an aggregate
/// constant can be matched exactly when encoding.
pub trait FlagSet: Copy + PartialEq {
    /// The set with no flags present.
    fn empty() -> Self;

    /// The union of `self` and `other`.
    #[must_use]
    fn union(self, other: Self) -> Self;

    /// Whether every flag in `other` is also present in `self`.
    fn contains(self, other: Self) -> bool;
}
