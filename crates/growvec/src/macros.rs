//! Literal-list construction.

/// Create a [`GrowVec`](crate::GrowVec) from a list of elements.
///
/// Mirrors `vec!`: `growvec![a, b, c]` holds the elements in order with a
/// capacity of twice their count, `growvec![x; n]` holds `n` clones of
/// `x`, and `growvec![]` allocates nothing.
///
/// ```
/// use growvec::growvec;
///
/// let v = growvec![1, 2, 3];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.capacity(), 6);
/// assert_eq!(v.get(1), Some(2));
/// ```
#[macro_export]
macro_rules! growvec {
    () => {
        $crate::GrowVec::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::GrowVec::from(::std::vec![$elem; $n])
    };
    ($($x:expr),+ $(,)?) => {
        $crate::GrowVec::from(::std::vec![$($x),+])
    };
}
