use std::fmt::Write as _;

use tracing::trace;

use crate::charts::{ChartPayload, ChartStyle, ChartViewports};
use crate::error::DashboardResult;
use crate::page::style::{Align, Inline, TextBlock, TextRole};
use crate::page::surface::{DisplaySurface, ImageBlock};
use crate::render::{SvgRenderer, escape_markup};

/// Builds a self-contained HTML document.
///
/// Charts are inlined as SVG; images are referenced by their path.
#[derive(Debug)]
pub struct HtmlSurface {
    title: String,
    viewports: ChartViewports,
    style: ChartStyle,
    body: String,
    charts_rendered: usize,
}

impl HtmlSurface {
    #[must_use]
    pub fn new(title: impl Into<String>, viewports: ChartViewports, style: ChartStyle) -> Self {
        Self {
            title: title.into(),
            viewports,
            style,
            body: String::new(),
            charts_rendered: 0,
        }
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn charts_rendered(&self) -> usize {
        self.charts_rendered
    }

    /// Wraps the accumulated body into a full document.
    #[must_use]
    pub fn finish(self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <main class="content">
{body}    </main>
</body>
</html>
"#,
            title = escape_markup(&self.title),
            css = inline_css(),
            body = self.body,
        )
    }
}

impl DisplaySurface for HtmlSurface {
    fn text(&mut self, block: &TextBlock) -> DashboardResult<()> {
        let tag = match block.role {
            TextRole::Title => "h1",
            TextRole::Heading => "h3",
            TextRole::Body | TextRole::Caption => "p",
        };
        let _ = writeln!(
            self.body,
            r#"        <{tag} class="{} {}">{}</{tag}>"#,
            role_class(block.role),
            align_class(block.align),
            render_inlines(&block.content)
        );
        Ok(())
    }

    fn image(&mut self, image: &ImageBlock) -> DashboardResult<()> {
        let path = image.path.to_string_lossy().replace('\\', "/");
        let sizing = match (image.full_width, image.width_px) {
            (true, _) => r#" class="full-width""#.to_owned(),
            (false, Some(width)) => format!(r#" width="{width}""#),
            (false, None) => String::new(),
        };
        let _ = writeln!(
            self.body,
            r#"        <img src="{}" alt="{}"{sizing}>"#,
            escape_markup(&path),
            escape_markup(&image.alt)
        );
        Ok(())
    }

    fn spacer(&mut self, lines: u32) -> DashboardResult<()> {
        if lines > 0 {
            let _ = writeln!(
                self.body,
                r#"        <div class="spacer" style="height: {}em"></div>"#,
                f64::from(lines) * 1.5
            );
        }
        Ok(())
    }

    fn chart(&mut self, chart: &ChartPayload) -> DashboardResult<()> {
        let viewport = self.viewports.for_payload(chart);
        let frame = chart.build_render_frame(viewport, &self.style)?;
        let svg = SvgRenderer::new().render_to_string(&frame)?;
        trace!(kind = chart.kind(), bytes = svg.len(), "inline chart svg");

        let _ = writeln!(self.body, r#"        <figure class="chart chart-{}">"#, chart.kind());
        let _ = writeln!(self.body, "            {svg}");
        if let Some(caption) = chart.caption() {
            let _ = writeln!(
                self.body,
                r#"            <figcaption class="align-center">{}</figcaption>"#,
                escape_markup(caption)
            );
        }
        self.body.push_str("        </figure>\n");
        self.charts_rendered += 1;
        Ok(())
    }
}

fn role_class(role: TextRole) -> &'static str {
    match role {
        TextRole::Title => "title",
        TextRole::Heading => "heading",
        TextRole::Body => "body",
        TextRole::Caption => "caption",
    }
}

fn align_class(align: Align) -> &'static str {
    match align {
        Align::Left => "align-left",
        Align::Center => "align-center",
        Align::Right => "align-right",
    }
}

fn render_inlines(content: &[Inline]) -> String {
    let mut out = String::new();
    for inline in content {
        render_inline(inline, &mut out);
    }
    out
}

fn render_inline(inline: &Inline, out: &mut String) {
    match inline {
        Inline::Text(text) => out.push_str(&escape_markup(text)),
        Inline::Bold { content, font_rem } => {
            let _ = write!(
                out,
                "<strong{}>{}</strong>",
                font_size_attr(*font_rem),
                render_inlines(content)
            );
        }
        Inline::Italic(content) => {
            let _ = write!(out, "<em>{}</em>", render_inlines(content));
        }
        Inline::Quiet { content, font_rem } => {
            let _ = write!(
                out,
                r#"<span class="quiet"{}>{}</span>"#,
                font_size_attr(*font_rem),
                render_inlines(content)
            );
        }
        Inline::Link { content, href } => {
            let _ = write!(
                out,
                r#"<a href="{}">{}</a>"#,
                escape_markup(href),
                render_inlines(content)
            );
        }
        Inline::Subscript(text) => {
            let _ = write!(out, "<sub>{}</sub>", escape_markup(text));
        }
        Inline::LineBreak => out.push_str("<br/>"),
    }
}

fn font_size_attr(font_rem: f64) -> String {
    if (font_rem - 1.0).abs() < f64::EPSILON || !font_rem.is_finite() || font_rem <= 0.0 {
        String::new()
    } else {
        format!(r#" style="font-size: {font_rem}rem""#)
    }
}

fn inline_css() -> &'static str {
    r#"
        body { font-family: "Source Sans Pro", Arial, sans-serif; color: #262730; margin: 0; }
        .content { max-width: 730px; margin: 0 auto; padding: 3rem 1rem; }
        .title { font-weight: bold; font-size: 2rem; }
        .heading { font-size: 1.25rem; }
        .body { font-size: 1rem; line-height: 1.6; }
        .caption { font-size: 0.9rem; }
        .align-left { text-align: left; }
        .align-center { text-align: center; }
        .align-right { text-align: right; }
        .quiet { color: gray; }
        .full-width { width: 100%; height: auto; }
        .chart { margin: 1.5rem 0; text-align: center; }
        .chart svg { max-width: 100%; height: auto; }
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::style::{bold, link_runs, quiet, text};

    fn surface() -> HtmlSurface {
        HtmlSurface::new("Test", ChartViewports::default(), ChartStyle::default())
    }

    #[test]
    fn nested_inlines_render_as_markup() {
        let mut surface = surface();
        surface
            .text(
                &TextBlock::body(vec![
                    text("a < b "),
                    bold("wind"),
                    link_runs(vec![quiet("Jan", 0.8)], "https://example.org/?a=1&b=2"),
                ])
                .aligned(Align::Right),
            )
            .expect("text");

        let body = surface.body();
        assert!(body.contains(r#"<p class="body align-right">"#));
        assert!(body.contains("a &lt; b <strong>wind</strong>"));
        assert!(body.contains(
            r#"<a href="https://example.org/?a=1&amp;b=2"><span class="quiet" style="font-size: 0.8rem">Jan</span></a>"#
        ));
    }

    #[test]
    fn finish_wraps_body_in_document() {
        let mut surface = surface();
        surface.spacer(2).expect("spacer");
        let html = surface.finish();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Test</title>"));
        assert!(html.contains(r#"class="spacer""#));
    }
}
