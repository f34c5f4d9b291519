// Line chart domain model: dataset, computed geometry, and the drawing surface seam
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of intervals between horizontal gridlines (six lines: 0/5 ..= 5/5).
pub const GRID_DIVISIONS: u32 = 5;
pub const TICK_LENGTH: f64 = 5.0;
pub const POINT_LABEL_ROTATION_DEG: f64 = 45.0;
const POINT_LABEL_OFFSET: f64 = 12.0;
const AXIS_LABEL_GAP: f64 = 4.0;
const AXIS_LABEL_FONT_SIZE: f64 = 10.0;
const POINT_LABEL_FONT_SIZE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Label → value series for the overall clicks chart.
///
/// Backed by a `BTreeMap`, so iteration is always in lexicographic label order
/// regardless of how the entries were inserted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartDataset {
    points: BTreeMap<String, f64>,
}

impl ChartDataset {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.points.iter().map(|(label, value)| (label.as_str(), *value))
    }

    /// Largest finite value, if any.
    pub fn max_value(&self) -> Option<f64> {
        self.points
            .values()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }
}

impl From<BTreeMap<String, f64>> for ChartDataset {
    fn from(points: BTreeMap<String, f64>) -> Self {
        Self { points }
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ChartDataset {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stroke {
    Grid,
    Axis,
    Series,
}

impl Stroke {
    pub fn width(&self) -> f64 {
        match self {
            Stroke::Grid => 0.5,
            Stroke::Axis => 1.0,
            Stroke::Series => 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAlign {
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    pub align: TextAlign,
    pub font_size: f64,
    pub rotation_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
    pub stroke: Stroke,
}

impl LineSegment {
    fn new(from: Point, to: Point, stroke: Stroke) -> Self {
        Self { from, to, stroke }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLabel {
    pub anchor: Point,
    pub text: String,
    pub style: TextStyle,
}

/// Rendering backend for computed chart geometry.
pub trait ChartSurface {
    fn line(&mut self, from: Point, to: Point, stroke: Stroke);
    fn text(&mut self, anchor: Point, text: &str, style: TextStyle);
    fn polyline(&mut self, points: &[Point], stroke: Stroke);
}

/// Everything needed to draw the chart, computed up front as plain data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartGeometry {
    pub size: SurfaceSize,
    /// Horizontal distance between consecutive points; 0 when there are fewer than two.
    pub spacing: f64,
    /// Surface units per value unit on the vertical axis.
    pub scale: f64,
    pub max_value: f64,
    pub gridlines: Vec<LineSegment>,
    pub axis_labels: Vec<ChartLabel>,
    pub baseline: LineSegment,
    pub ticks: Vec<LineSegment>,
    pub point_gridlines: Vec<LineSegment>,
    pub point_labels: Vec<ChartLabel>,
    pub path: Vec<Point>,
}

impl ChartGeometry {
    pub fn compute(dataset: &ChartDataset, size: SurfaceSize) -> Self {
        let SurfaceSize { width, height } = size;
        let count = dataset.len();

        let spacing = if count >= 2 {
            width / (count - 1) as f64
        } else {
            0.0
        };

        // A non-positive max would flip or blow up the scale; pin everything to the baseline.
        let max_value = dataset.max_value().filter(|m| *m > 0.0).unwrap_or(0.0);
        let scale = if max_value > 0.0 {
            height / max_value
        } else {
            height
        };

        let mut gridlines = Vec::with_capacity(GRID_DIVISIONS as usize + 1);
        let mut axis_labels = Vec::with_capacity(GRID_DIVISIONS as usize + 1);
        for level in 0..=GRID_DIVISIONS {
            let fraction = level as f64 / GRID_DIVISIONS as f64;
            let y = height - fraction * height;

            gridlines.push(LineSegment::new(
                Point::new(0.0, y),
                Point::new(width, y),
                Stroke::Grid,
            ));
            axis_labels.push(ChartLabel {
                anchor: Point::new(-AXIS_LABEL_GAP, y),
                text: format!("{}", (fraction * max_value).round() as i64),
                style: TextStyle {
                    align: TextAlign::End,
                    font_size: AXIS_LABEL_FONT_SIZE,
                    rotation_deg: 0.0,
                },
            });
        }

        let baseline = LineSegment::new(
            Point::new(0.0, height),
            Point::new(width, height),
            Stroke::Axis,
        );

        let mut ticks = Vec::with_capacity(count);
        let mut point_gridlines = Vec::with_capacity(count);
        let mut point_labels = Vec::with_capacity(count);
        let mut path = Vec::with_capacity(count);

        for (i, (label, value)) in dataset.iter().enumerate() {
            let x = i as f64 * spacing;
            let y = height - value * scale;

            ticks.push(LineSegment::new(
                Point::new(x, height),
                Point::new(x, height + TICK_LENGTH),
                Stroke::Axis,
            ));
            point_gridlines.push(LineSegment::new(
                Point::new(x, 0.0),
                Point::new(x, height),
                Stroke::Grid,
            ));
            point_labels.push(ChartLabel {
                anchor: Point::new(x, height + POINT_LABEL_OFFSET),
                text: label.to_string(),
                style: TextStyle {
                    align: TextAlign::Center,
                    font_size: POINT_LABEL_FONT_SIZE,
                    rotation_deg: POINT_LABEL_ROTATION_DEG,
                },
            });
            path.push(Point::new(x, y));
        }

        Self {
            size,
            spacing,
            scale,
            max_value,
            gridlines,
            axis_labels,
            baseline,
            ticks,
            point_gridlines,
            point_labels,
            path,
        }
    }

    /// Replay the geometry onto a surface. The surface is expected to be fresh.
    pub fn draw(&self, surface: &mut dyn ChartSurface) {
        for (line, label) in self.gridlines.iter().zip(&self.axis_labels) {
            surface.line(line.from, line.to, line.stroke);
            surface.text(label.anchor, &label.text, label.style);
        }

        surface.line(self.baseline.from, self.baseline.to, self.baseline.stroke);

        for ((tick, grid), label) in self
            .ticks
            .iter()
            .zip(&self.point_gridlines)
            .zip(&self.point_labels)
        {
            surface.line(tick.from, tick.to, tick.stroke);
            surface.line(grid.from, grid.to, grid.stroke);
            surface.text(label.anchor, &label.text, label.style);
        }

        if !self.path.is_empty() {
            surface.polyline(&self.path, Stroke::Series);
        }
    }
}
