//! Plchart: the renderer-independent chart model consuming plcore samples.
//!
//! Role
//! - Hold what a renderer needs and nothing it doesn't: an ordered list of
//!   lines plus titles, axis labels, and fixed axis locations.
//! - Offer two explicit entry points, [`Chart::add_line`] for one sample
//!   sequence and [`Chart::add_lines`] for many, so callers state the shape
//!   of their data instead of the model sniffing it at runtime.
//!
//! Rendering, export, and styling beyond per-line hints are deliberately
//! absent; any backend can walk [`Chart::lines`] and draw.

use log::debug;

use plcore::Point;

/// Filepath extension handling for export-side consumers.
pub mod path;

/// Per-line presentation hints. All optional; a renderer supplies its own
/// defaults for anything unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineStyle {
    pub legend_label: Option<String>,
    pub color: Option<String>,
    pub width: Option<u32>,
}

/// One plottable line: an ordered sample sequence plus its style.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub points: Vec<Point>,
    pub style: LineStyle,
}

/// An ordered collection of lines with chart-level metadata.
#[derive(Debug, Clone, Default)]
pub struct Chart {
    title: Option<String>,
    x_axis_label: Option<String>,
    y_axis_label: Option<String>,
    x_axis_location: Option<f64>,
    y_axis_location: Option<f64>,
    lines: Vec<Line>,
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn x_axis_label(&self) -> Option<&str> {
        self.x_axis_label.as_deref()
    }

    pub fn set_x_axis_label(&mut self, label: impl Into<String>) {
        self.x_axis_label = Some(label.into());
    }

    pub fn y_axis_label(&self) -> Option<&str> {
        self.y_axis_label.as_deref()
    }

    pub fn set_y_axis_label(&mut self, label: impl Into<String>) {
        self.y_axis_label = Some(label.into());
    }

    /// Where the x axis crosses the y axis, if pinned.
    pub fn x_axis_location(&self) -> Option<f64> {
        self.x_axis_location
    }

    pub fn set_x_axis_location(&mut self, location: f64) {
        self.x_axis_location = Some(location);
    }

    /// Where the y axis crosses the x axis, if pinned.
    pub fn y_axis_location(&self) -> Option<f64> {
        self.y_axis_location
    }

    pub fn set_y_axis_location(&mut self, location: f64) {
        self.y_axis_location = Some(location);
    }

    /// Append one line with default styling.
    pub fn add_line(&mut self, points: Vec<Point>) {
        self.add_line_styled(points, LineStyle::default());
    }

    /// Append one line with explicit styling.
    pub fn add_line_styled(&mut self, points: Vec<Point>, style: LineStyle) {
        debug!("adding line with {} points", points.len());
        self.lines.push(Line { points, style });
    }

    /// Append many lines with default styling, in iteration order.
    pub fn add_lines(&mut self, lines: impl IntoIterator<Item = Vec<Point>>) {
        for points in lines {
            self.add_line(points);
        }
    }

    /// The lines in insertion order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}
