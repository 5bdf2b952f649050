use crate::charts::ChartStyle;
use crate::core::{LinearScale, PlotArea};
use crate::error::DashboardResult;
use crate::render::{LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

const TICK_LENGTH_PX: f64 = 5.0;
const LABEL_GAP_PX: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HorizontalAxisSide {
    Top,
    Bottom,
}

/// Formats a tick value with at most three decimals and no trailing zeros.
#[must_use]
pub(crate) fn format_tick(value: f64) -> String {
    let text = format!("{value:.3}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Horizontal axis line, ticks, labels and vertical grid lines at `ticks`.
pub(crate) fn push_horizontal_axis(
    frame: &mut RenderFrame,
    area: PlotArea,
    scale: LinearScale,
    ticks: &[f64],
    side: HorizontalAxisSide,
    style: &ChartStyle,
) -> DashboardResult<()> {
    let axis_y = match side {
        HorizontalAxisSide::Top => area.top,
        HorizontalAxisSide::Bottom => area.bottom(),
    };
    frame.lines.push(LinePrimitive::new(
        area.left,
        axis_y,
        area.right(),
        axis_y,
        1.0,
        style.axis_color,
    ));

    for &tick in ticks {
        let x = scale.to_range(tick, area.left, area.right())?;
        frame.lines.push(LinePrimitive::new(
            x,
            area.top,
            x,
            area.bottom(),
            1.0,
            style.grid_color,
        ));
        let (tick_end, label_y) = match side {
            HorizontalAxisSide::Top => (axis_y - TICK_LENGTH_PX, axis_y - TICK_LENGTH_PX - LABEL_GAP_PX),
            HorizontalAxisSide::Bottom => (
                axis_y + TICK_LENGTH_PX,
                axis_y + TICK_LENGTH_PX + LABEL_GAP_PX + style.font_size_px,
            ),
        };
        frame.lines.push(LinePrimitive::new(
            x,
            axis_y,
            x,
            tick_end,
            1.0,
            style.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_tick(tick),
            x,
            label_y,
            style.font_size_px,
            style.axis_color,
            TextHAlign::Center,
        ));
    }
    Ok(())
}

/// Left vertical axis line, ticks, labels and horizontal grid lines.
pub(crate) fn push_vertical_axis(
    frame: &mut RenderFrame,
    area: PlotArea,
    scale: LinearScale,
    ticks: &[f64],
    style: &ChartStyle,
) -> DashboardResult<()> {
    frame.lines.push(LinePrimitive::new(
        area.left,
        area.top,
        area.left,
        area.bottom(),
        1.0,
        style.axis_color,
    ));

    for &tick in ticks {
        let y = scale.to_range(tick, area.bottom(), area.top)?;
        frame.lines.push(LinePrimitive::new(
            area.left,
            y,
            area.right(),
            y,
            1.0,
            style.grid_color,
        ));
        frame.lines.push(LinePrimitive::new(
            area.left - TICK_LENGTH_PX,
            y,
            area.left,
            y,
            1.0,
            style.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_tick(tick),
            area.left - TICK_LENGTH_PX - LABEL_GAP_PX,
            y + style.font_size_px * 0.35,
            style.font_size_px,
            style.axis_color,
            TextHAlign::Right,
        ));
    }
    Ok(())
}

/// Axis title centered under the plot area.
pub(crate) fn push_bottom_title(frame: &mut RenderFrame, area: PlotArea, title: &str, style: &ChartStyle) {
    frame.texts.push(TextPrimitive::new(
        title,
        area.left + area.width / 2.0,
        area.bottom() + TICK_LENGTH_PX + LABEL_GAP_PX * 2.0 + style.font_size_px * 2.2,
        style.font_size_px,
        style.axis_color,
        TextHAlign::Center,
    ));
}

/// Axis title placed above the left axis.
pub(crate) fn push_left_title(frame: &mut RenderFrame, area: PlotArea, title: &str, style: &ChartStyle) {
    frame.texts.push(TextPrimitive::new(
        title,
        area.left,
        area.top - LABEL_GAP_PX * 2.0,
        style.font_size_px,
        style.axis_color,
        TextHAlign::Center,
    ));
}
