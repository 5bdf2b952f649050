use std::f64::consts::TAU;
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{DashboardError, DashboardResult};
use crate::render::{
    Color, LineStrokeStyle, MarkerPrimitive, MarkerShape, RenderFrame, Renderer, TextHAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub markers_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo raster backend used for PNG chart export.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> DashboardResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(DashboardError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the most recently rendered frame as PNG.
    pub fn write_png(&self, path: &Path) -> DashboardResult<()> {
        let mut file = File::create(path).map_err(|err| DashboardError::io(path, err))?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| DashboardError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> DashboardResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for rect in &frame.rects {
            apply_color(context, rect.fill_color);
            context.rectangle(rect.x, rect.y, rect.width, rect.height);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            stats.rects_drawn += 1;
        }

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            match line.stroke_style {
                LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
                LineStrokeStyle::Dashed => context.set_dash(&[6.0, 4.0], 0.0),
            }
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }
        context.set_dash(&[], 0.0);

        for marker in &frame.markers {
            draw_marker(context, marker)?;
            stats.markers_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            let font_description =
                FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, _) = layout.pixel_size();
            let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };

            apply_color(context, text.color);
            context.move_to(x, text.y - baseline);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> DashboardResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

fn draw_marker(context: &Context, marker: &MarkerPrimitive) -> DashboardResult<()> {
    let half = marker.size_px / 2.0;
    let (x, y) = (marker.x, marker.y);
    apply_color(context, marker.fill_color);

    match marker.shape {
        MarkerShape::Circle => {
            context.new_sub_path();
            context.arc(x, y, half, 0.0, TAU);
        }
        MarkerShape::Square => context.rectangle(x - half, y - half, marker.size_px, marker.size_px),
        MarkerShape::Diamond => polygon(
            context,
            &[(x, y - half), (x + half, y), (x, y + half), (x - half, y)],
        ),
        MarkerShape::TriangleUp => polygon(
            context,
            &[(x, y - half), (x + half, y + half), (x - half, y + half)],
        ),
        MarkerShape::TriangleDown => polygon(
            context,
            &[(x - half, y - half), (x + half, y - half), (x, y + half)],
        ),
        MarkerShape::Cross => {
            context.set_line_width(2.0);
            context.move_to(x - half, y - half);
            context.line_to(x + half, y + half);
            context.move_to(x - half, y + half);
            context.line_to(x + half, y - half);
            return context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke marker", err));
        }
    }

    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill marker", err))
}

fn polygon(context: &Context, points: &[(f64, f64)]) {
    let Some(((first_x, first_y), rest)) = points.split_first().map(|(f, r)| (*f, r)) else {
        return;
    };
    context.move_to(first_x, first_y);
    for (x, y) in rest {
        context.line_to(*x, *y);
    }
    context.close_path();
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> DashboardError {
    DashboardError::InvalidData(format!("{prefix}: {err}"))
}
