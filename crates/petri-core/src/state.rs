//! The [`CellState`] bound shared by grids and rules.

use std::fmt::Debug;
use std::hash::Hash;

/// Bound on the state alphabet a grid can hold.
///
/// States are small `Copy` labels compared by value: rule crates
/// typically define a fieldless enum per rule (dead/alive,
/// empty/tree/burning, ...). `Hash + Eq` feed the census map, `Debug`
/// feeds diagnostics. Membership in a particular rule's alphabet is
/// not enforced here — callers must use a consistent alphabet, and a
/// typed enum per rule makes mixing alphabets a compile error.
///
/// Blanket-implemented for every qualifying type, including `bool` and
/// small integers, which the test fixtures use directly.
pub trait CellState: Copy + Eq + Hash + Debug + Send + 'static {}

impl<T: Copy + Eq + Hash + Debug + Send + 'static> CellState for T {}
