use std::fmt::Write as _;

use crate::error::DashboardResult;
use crate::render::{
    Color, LineStrokeStyle, MarkerPrimitive, MarkerShape, RenderFrame, Renderer, TextHAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub markers_drawn: usize,
    pub texts_drawn: usize,
}

/// Renders frames into standalone SVG documents.
///
/// Marker tooltips become `<title>` children so browsers show them on hover.
#[derive(Debug)]
pub struct SvgRenderer {
    background: Color,
    font_family: String,
    last_svg: String,
    last_stats: SvgRenderStats,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            font_family: "Arial, Helvetica, sans-serif".to_owned(),
            last_svg: String::new(),
            last_stats: SvgRenderStats::default(),
        }
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_svg(&self) -> &str {
        &self.last_svg
    }

    #[must_use]
    pub fn into_svg(self) -> String {
        self.last_svg
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    /// Renders one frame and returns the SVG markup.
    pub fn render_to_string(&mut self, frame: &RenderFrame) -> DashboardResult<String> {
        self.render(frame)?;
        Ok(self.last_svg.clone())
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> DashboardResult<()> {
        frame.validate()?;

        let width = frame.viewport.width;
        let height = frame.viewport.height;
        let mut svg = String::with_capacity(256 + frame.markers.len() * 96);
        let mut stats = SvgRenderStats::default();

        // `write!` into a String cannot fail.
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="{}">"#,
            escape_markup(&self.font_family)
        );
        let _ = write!(
            svg,
            r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{}"/>"#,
            self.background.to_hex()
        );

        for rect in &frame.rects {
            let _ = write!(
                svg,
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"{}/>"#,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                rect.fill_color.to_hex(),
                opacity_attr("fill-opacity", rect.fill_color)
            );
            stats.rects_drawn += 1;
        }

        for line in &frame.lines {
            let dash = match line.stroke_style {
                LineStrokeStyle::Solid => "",
                LineStrokeStyle::Dashed => r#" stroke-dasharray="6 4""#,
            };
            let _ = write!(
                svg,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"{}{dash}/>"#,
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                line.color.to_hex(),
                line.stroke_width,
                opacity_attr("stroke-opacity", line.color)
            );
            stats.lines_drawn += 1;
        }

        for marker in &frame.markers {
            write_marker(&mut svg, marker);
            stats.markers_drawn += 1;
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            let _ = write!(
                svg,
                r#"<text x="{:.2}" y="{:.2}" font-size="{}" fill="{}" text-anchor="{anchor}">{}</text>"#,
                text.x,
                text.y,
                text.font_size_px,
                text.color.to_hex(),
                escape_markup(&text.text)
            );
            stats.texts_drawn += 1;
        }

        svg.push_str("</svg>");
        self.last_svg = svg;
        self.last_stats = stats;
        Ok(())
    }
}

fn write_marker(svg: &mut String, marker: &MarkerPrimitive) {
    let fill = marker.fill_color.to_hex();
    let opacity = opacity_attr("fill-opacity", marker.fill_color);
    let half = marker.size_px / 2.0;
    let (x, y) = (marker.x, marker.y);

    let open = match marker.shape {
        MarkerShape::Circle => {
            format!(r#"<circle cx="{x:.2}" cy="{y:.2}" r="{half:.2}" fill="{fill}"{opacity}"#)
        }
        MarkerShape::Square => format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{fill}"{opacity}"#,
            x - half,
            y - half,
            marker.size_px,
            marker.size_px
        ),
        MarkerShape::Diamond => polygon(
            &[(x, y - half), (x + half, y), (x, y + half), (x - half, y)],
            &fill,
            &opacity,
        ),
        MarkerShape::TriangleUp => polygon(
            &[(x, y - half), (x + half, y + half), (x - half, y + half)],
            &fill,
            &opacity,
        ),
        MarkerShape::TriangleDown => polygon(
            &[(x - half, y - half), (x + half, y - half), (x, y + half)],
            &fill,
            &opacity,
        ),
        MarkerShape::Cross => format!(
            r#"<path d="M{:.2},{:.2}L{:.2},{:.2}M{:.2},{:.2}L{:.2},{:.2}" stroke="{fill}" stroke-width="2"{}"#,
            x - half,
            y - half,
            x + half,
            y + half,
            x - half,
            y + half,
            x + half,
            y - half,
            opacity_attr("stroke-opacity", marker.fill_color)
        ),
    };

    let tag = match marker.shape {
        MarkerShape::Circle => "circle",
        MarkerShape::Square => "rect",
        MarkerShape::Cross => "path",
        MarkerShape::Diamond | MarkerShape::TriangleUp | MarkerShape::TriangleDown => "polygon",
    };

    svg.push_str(&open);
    match &marker.tooltip {
        Some(tooltip) => {
            let _ = write!(svg, "><title>{}</title></{tag}>", escape_markup(tooltip));
        }
        None => svg.push_str("/>"),
    }
}

fn polygon(points: &[(f64, f64)], fill: &str, opacity: &str) -> String {
    let mut out = String::from(r#"<polygon points=""#);
    for (index, (x, y)) in points.iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{x:.2},{y:.2}");
    }
    let _ = write!(out, r#"" fill="{fill}"{opacity}"#);
    out
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.alpha >= 1.0 {
        String::new()
    } else {
        format!(r#" {name}="{:.3}""#, color.alpha)
    }
}

/// Escapes text for use inside HTML/SVG element content and attribute values.
#[must_use]
pub fn escape_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Viewport;
    use crate::render::{MarkerPrimitive, TextPrimitive};

    #[test]
    fn escape_markup_replaces_reserved_characters() {
        assert_eq!(
            escape_markup(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn marker_tooltip_is_written_as_title_child() {
        let frame = RenderFrame::new(Viewport::new(100, 100)).with_marker(
            MarkerPrimitive::new(10.0, 10.0, 6.0, MarkerShape::Diamond, Color::BLACK)
                .with_tooltip("Polarity=0.5"),
        );
        let svg = SvgRenderer::new().render_to_string(&frame).expect("render");
        assert!(svg.contains("<polygon"));
        assert!(svg.contains("<title>Polarity=0.5</title></polygon>"));
    }

    #[test]
    fn text_is_escaped_and_anchored() {
        let frame = RenderFrame::new(Viewport::new(100, 100)).with_text(TextPrimitive::new(
            "a<b",
            50.0,
            20.0,
            12.0,
            Color::BLACK,
            TextHAlign::Center,
        ));
        let mut renderer = SvgRenderer::new();
        renderer.render(&frame).expect("render");
        assert!(renderer.last_svg().contains(r#"text-anchor="middle">a&lt;b</text>"#));
        assert_eq!(renderer.last_stats().texts_drawn, 1);
    }
}
