//! Declarative helper for defining flag-set structs.

/// Defines a bit-flag-set struct over an unsigned integer type.
///
/// The struct gets the usual set operations, bit-or operators, and a
/// [`FlagSet`](crate::FlagSet) impl, so it is ready for `#[flag_names]`.
/// Flag constants are declared separately, in an inherent `impl` block, which
/// is the block the attribute reads:
///
/// ```
/// flagwire::flag_set! {
///     /// Text styling switches.
///     pub struct Styles(u32);
/// }
///
/// impl Styles {
///     pub const BOLD: Styles = Styles(1 << 0);
///     pub const ITALIC: Styles = Styles(1 << 1);
/// }
///
/// let both = Styles::BOLD | Styles::ITALIC;
/// assert!(both.contains(Styles::BOLD));
/// assert!(!Styles::ITALIC.contains(both));
/// ```
#[macro_export]
macro_rules! flag_set {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident($T:ty);
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        $vis struct $Name($vis $T);

        impl $Name {
            /// The empty set.
            #[inline]
            $vis const fn empty() -> Self {
                Self(0)
            }

            /// The raw backing bits.
            #[inline]
            $vis const fn bits(self) -> $T {
                self.0
            }

            /// `true` when no flag is set.
            #[inline]
            $vis const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// `true` when every flag in `other` is also set in `self`.
            #[inline]
            $vis const fn contains(self, other: Self) -> bool {
                (self.0 & other.0) == other.0
            }

            /// The union of the two sets.
            #[inline]
            #[must_use]
            $vis const fn union(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }

            /// Adds the flags in `other` to `self`.
            #[inline]
            $vis fn insert(&mut self, other: Self) {
                self.0 |= other.0;
            }
        }

        impl ::core::ops::BitOr for $Name {
            type Output = Self;

            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl ::core::ops::BitOrAssign for $Name {
            #[inline]
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl ::core::fmt::Debug for $Name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, concat!(stringify!($Name), "({:#b})"), self.0)
            }
        }

        impl $crate::FlagSet for $Name {
            fn empty() -> Self {
                Self(0)
            }

            fn union(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }

            fn contains(self, other: Self) -> bool {
                (self.0 & other.0) == other.0
            }
        }
    };
}
