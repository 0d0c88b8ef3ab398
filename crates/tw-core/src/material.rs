//! Rim-highlight material

/// RGBA color
pub type Color = [f32; 4];

/// Shaded material with a colored rim highlight.
///
/// Fragments whose rim factor exceeds `highlight_lower_bound` are tinted with
/// `highlight_color`, scaled by `highlight_scale`. Cloning yields another
/// `RimShadowMaterial`, so a configured template can be duplicated per handle.
#[derive(Debug, Clone, PartialEq)]
pub struct RimShadowMaterial {
    /// Rim tint color
    pub highlight_color: Color,
    /// Rim factor threshold
    pub highlight_lower_bound: f32,
    /// Rim intensity multiplier
    pub highlight_scale: f32,
    /// Whether fragments are depth tested
    pub depth_test: bool,
}

impl Default for RimShadowMaterial {
    fn default() -> Self {
        Self {
            highlight_color: [1.0, 1.0, 1.0, 1.0],
            highlight_lower_bound: 0.5,
            highlight_scale: 1.0,
            depth_test: true,
        }
    }
}

impl RimShadowMaterial {
    /// Create a material with default rim settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rim highlight color
    pub fn set_highlight_color(&mut self, color: Color) {
        self.highlight_color = color;
    }

    /// Set the rim factor above which the highlight applies
    pub fn set_highlight_lower_bound(&mut self, bound: f32) {
        self.highlight_lower_bound = bound;
    }

    /// Set the highlight intensity multiplier
    pub fn set_highlight_scale(&mut self, scale: f32) {
        self.highlight_scale = scale;
    }

    /// Enable or disable depth testing
    pub fn set_depth_test_enabled(&mut self, enabled: bool) {
        self.depth_test = enabled;
    }
}
