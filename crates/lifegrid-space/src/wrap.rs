//! Per-axis toroidal wrap.

/// Resolve one axis of a neighbour offset under toroidal wrap.
///
/// `val` is a cell index plus an offset in `{-1, 0, 1}`. A value one step
/// before the start maps to the last index and one step past the end maps
/// to index 0; in-range values are returned unchanged. On a one-cell axis
/// both directions land on the cell itself.
///
/// This is true wrap, not clamping: the left neighbour of column 0 is
/// column `len - 1`.
///
/// # Examples
///
/// ```
/// use lifegrid_space::wrap_axis;
///
/// assert_eq!(wrap_axis(-1, 5), 4);
/// assert_eq!(wrap_axis(5, 5), 0);
/// assert_eq!(wrap_axis(3, 5), 3);
/// ```
pub fn wrap_axis(val: i64, len: u32) -> u32 {
    debug_assert!(len > 0, "wrap_axis on an empty axis");
    let n = i64::from(len);
    if val < 0 {
        len - 1
    } else if val >= n {
        0
    } else {
        val as u32
    }
}
