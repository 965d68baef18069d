//! Terminal panel resize math.

use crate::config::layout::{MIN_EDITOR_HEIGHT, MIN_TERMINAL_HEIGHT};

/// Panel height for a drag ending at `pointer_y` in a viewport of
/// `viewport_height` pixels.
///
/// The panel fills the space below the pointer, clamped so both the
/// terminal and the editor above it keep their minimum heights.
pub fn panel_height(viewport_height: f64, pointer_y: f64) -> f64 {
    let max = (viewport_height - MIN_EDITOR_HEIGHT).max(MIN_TERMINAL_HEIGHT);
    (viewport_height - pointer_y).clamp(MIN_TERMINAL_HEIGHT, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_follows_pointer() {
        assert_eq!(panel_height(900.0, 600.0), 300.0);
    }

    #[test]
    fn test_height_clamped_to_minimum() {
        assert_eq!(panel_height(900.0, 899.0), MIN_TERMINAL_HEIGHT);
        assert_eq!(panel_height(900.0, 2000.0), MIN_TERMINAL_HEIGHT);
    }

    #[test]
    fn test_editor_keeps_minimum() {
        assert_eq!(panel_height(900.0, 0.0), 900.0 - MIN_EDITOR_HEIGHT);
        assert_eq!(panel_height(900.0, -50.0), 900.0 - MIN_EDITOR_HEIGHT);
    }

    #[test]
    fn test_tiny_viewport() {
        assert_eq!(panel_height(50.0, 10.0), MIN_TERMINAL_HEIGHT);
    }
}
