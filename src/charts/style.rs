use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};
use crate::render::Color;

/// Fixed styling constants shared by the chart renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Noun used in bar-chart captions ("Showing 5 {noun}: ...").
    #[serde(default = "default_subject_noun")]
    pub subject_noun: String,
    #[serde(default = "default_bar_color")]
    pub bar_color: Color,
    #[serde(default = "default_bar_highlight_color")]
    pub bar_highlight_color: Color,
    /// Colors assigned to scatter classes and line subjects, cycled in order.
    #[serde(default = "default_category_colors")]
    pub category_colors: Vec<Color>,
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default = "default_grid_color")]
    pub grid_color: Color,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
    #[serde(default = "default_marker_size_px")]
    pub marker_size_px: f64,
    #[serde(default = "default_line_width_px")]
    pub line_width_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            subject_noun: default_subject_noun(),
            bar_color: default_bar_color(),
            bar_highlight_color: default_bar_highlight_color(),
            category_colors: default_category_colors(),
            axis_color: default_axis_color(),
            grid_color: default_grid_color(),
            font_size_px: default_font_size_px(),
            marker_size_px: default_marker_size_px(),
            line_width_px: default_line_width_px(),
        }
    }
}

impl ChartStyle {
    /// Color for the `index`-th category; wraps around the palette.
    #[must_use]
    pub fn category_color(&self, index: usize) -> Color {
        if self.category_colors.is_empty() {
            return self.axis_color;
        }
        self.category_colors[index % self.category_colors.len()]
    }

    pub fn validate(&self) -> DashboardResult<()> {
        self.bar_color.validate()?;
        self.bar_highlight_color.validate()?;
        self.axis_color.validate()?;
        self.grid_color.validate()?;
        for color in &self.category_colors {
            color.validate()?;
        }
        for (name, value) in [
            ("font_size_px", self.font_size_px),
            ("marker_size_px", self.marker_size_px),
            ("line_width_px", self.line_width_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DashboardError::Config(format!(
                    "chart style `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}

fn default_subject_noun() -> String {
    "Anime Shows".to_owned()
}

fn default_bar_color() -> Color {
    Color::LIGHT_SKY_BLUE
}

fn default_bar_highlight_color() -> Color {
    Color::DODGER_BLUE
}

fn default_category_colors() -> Vec<Color> {
    vec![
        Color::from_rgb8(99, 110, 250),
        Color::from_rgb8(239, 85, 59),
        Color::from_rgb8(0, 204, 150),
        Color::from_rgb8(171, 99, 250),
        Color::from_rgb8(255, 161, 90),
        Color::from_rgb8(25, 211, 243),
        Color::from_rgb8(255, 102, 146),
        Color::from_rgb8(182, 232, 128),
        Color::from_rgb8(255, 151, 255),
        Color::from_rgb8(254, 203, 82),
    ]
}

fn default_axis_color() -> Color {
    Color::from_rgb8(68, 68, 68)
}

fn default_grid_color() -> Color {
    Color::from_rgb8(230, 230, 230)
}

fn default_font_size_px() -> f64 {
    13.0
}

fn default_marker_size_px() -> f64 {
    7.0
}

fn default_line_width_px() -> f64 {
    2.0
}
