// SVG chart surface - renders computed chart geometry as a standalone SVG document
use crate::domain::chart::{ChartSurface, Point, Stroke, SurfaceSize, TextAlign, TextStyle};
use std::fmt::Write;

/// Room around the plot area for the axis labels and rotated point labels.
const MARGIN_LEFT: f64 = 40.0;
const MARGIN_TOP: f64 = 10.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

const GRID_COLOR: &str = "#d3d3d3";
const SERIES_COLOR: &str = "#0e6fff";
const TEXT_COLOR: &str = "#000000";

pub struct SvgSurface {
    size: SurfaceSize,
    body: String,
}

impl SvgSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            body: String::new(),
        }
    }

    pub fn finish(self) -> String {
        let width = self.size.width + MARGIN_LEFT + MARGIN_RIGHT;
        let height = self.size.height + MARGIN_TOP + MARGIN_BOTTOM;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns='http://www.w3.org/2000/svg' width='{:.0}' height='{:.0}' viewBox='0 0 {:.0} {:.0}' role='img'>",
            width, height, width, height
        );
        let _ = writeln!(
            svg,
            "  <g transform='translate({:.0} {:.0})'>",
            MARGIN_LEFT, MARGIN_TOP
        );
        svg.push_str(&self.body);
        let _ = writeln!(svg, "  </g>");
        let _ = writeln!(svg, "</svg>");
        svg
    }
}

fn stroke_color(stroke: Stroke) -> &'static str {
    match stroke {
        Stroke::Grid | Stroke::Axis => GRID_COLOR,
        Stroke::Series => SERIES_COLOR,
    }
}

impl ChartSurface for SvgSurface {
    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        let _ = writeln!(
            self.body,
            "    <line x1='{:.2}' y1='{:.2}' x2='{:.2}' y2='{:.2}' stroke='{}' stroke-width='{}'/>",
            from.x,
            from.y,
            to.x,
            to.y,
            stroke_color(stroke),
            stroke.width()
        );
    }

    fn text(&mut self, anchor: Point, text: &str, style: TextStyle) {
        let text_anchor = match style.align {
            TextAlign::Center => "middle",
            TextAlign::End => "end",
        };
        let transform = if style.rotation_deg != 0.0 {
            format!(
                " transform='rotate({} {:.2} {:.2})'",
                style.rotation_deg, anchor.x, anchor.y
            )
        } else {
            String::new()
        };
        let _ = writeln!(
            self.body,
            "    <text x='{:.2}' y='{:.2}' fill='{}' font-family='sans-serif' font-size='{}' text-anchor='{}' dominant-baseline='middle'{}>{}</text>",
            anchor.x,
            anchor.y,
            TEXT_COLOR,
            style.font_size,
            text_anchor,
            transform,
            escape_text(text)
        );
    }

    fn polyline(&mut self, points: &[Point], stroke: Stroke) {
        let coords = points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            self.body,
            "    <polyline points='{}' fill='none' stroke='{}' stroke-width='{}' stroke-linejoin='round'/>",
            coords,
            stroke_color(stroke),
            stroke.width()
        );
    }
}

fn escape_text(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
