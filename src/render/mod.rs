mod frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, LineStrokeStyle, MarkerPrimitive, MarkerShape, RectPrimitive,
    TextHAlign, TextPrimitive,
};
pub use svg_backend::{SvgRenderStats, SvgRenderer, escape_markup};

use crate::error::DashboardResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from chart data and layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> DashboardResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
