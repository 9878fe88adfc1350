//! Pointer input mapping

/// Vertical pointer offset within an element, as a fraction of its height.
///
/// Returns `None` when the element has no height (not laid out yet).
pub fn pointer_fraction(offset_y: f32, element_height: f32) -> Option<f32> {
    if !(element_height > 0.0) || !offset_y.is_finite() {
        return None;
    }
    Some(offset_y / element_height)
}
