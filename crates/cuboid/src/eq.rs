//! Pluggable cell-equality strategies.
//!
//! A [`Volume`](crate::Volume) carries its equality strategy as a type
//! parameter, so the comparison semantics are part of the container's type
//! identity. Two volumes over the same element type but different strategies
//! are different types and cannot be compared with `==` directly.

/// Equality capability over cell values of type `T`.
///
/// Implementors are plain value types (usually unit structs or small
/// configuration structs) bound to a volume at construction via
/// [`Volume::with_strategy`](crate::Volume::with_strategy).
///
/// # Examples
///
/// ```
/// use cuboid::{CellEq, Volume};
///
/// /// Compares ASCII letters ignoring case.
/// #[derive(Clone, Copy, Debug, Default)]
/// struct IgnoreCase;
///
/// impl CellEq<char> for IgnoreCase {
///     fn eq(&self, a: &char, b: &char) -> bool {
///         a.eq_ignore_ascii_case(b)
///     }
/// }
///
/// let a = Volume::filled(1, 1, 2, 'q').with_strategy(IgnoreCase);
/// let b = Volume::filled(1, 1, 2, 'Q').with_strategy(IgnoreCase);
/// assert!(a == b);
/// ```
pub trait CellEq<T> {
    /// Returns `true` when `a` and `b` compare equal under this strategy.
    fn eq(&self, a: &T, b: &T) -> bool;
}

/// Default strategy: the element type's own `==`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NativeEq;

impl<T: PartialEq> CellEq<T> for NativeEq {
    #[inline]
    fn eq(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Absolute-difference tolerance strategy for floating-point cells.
///
/// Two cells compare equal when `|a - b| <= eps`. Not an equivalence
/// relation (it is not transitive), which is acceptable for its intended
/// use: comparing volumes produced by numerically noisy pipelines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpsilonEq {
    /// Maximum absolute difference still considered equal.
    pub eps: f64,
}

impl EpsilonEq {
    /// Creates a strategy with the given tolerance.
    pub fn new(eps: f64) -> Self {
        Self { eps }
    }
}

impl Default for EpsilonEq {
    fn default() -> Self {
        Self { eps: 1e-9 }
    }
}

impl CellEq<f32> for EpsilonEq {
    #[inline]
    fn eq(&self, a: &f32, b: &f32) -> bool {
        f64::from(*a - *b).abs() <= self.eps
    }
}

impl CellEq<f64> for EpsilonEq {
    #[inline]
    fn eq(&self, a: &f64, b: &f64) -> bool {
        (*a - *b).abs() <= self.eps
    }
}
