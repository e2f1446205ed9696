use crate::core::{
    ChartData, DEFAULT_TENSION, Padding, PathData, PathPoint, Point, Viewport, area_path,
    project_point, smooth_path,
};

use super::cartesian::CartesianFrame;

/// Projected geometry of one line series.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeriesLayout {
    pub dataset_index: usize,
    pub points: Vec<PathPoint>,
    pub line_path: PathData,
    pub area_path: PathData,
}

impl LineSeriesLayout {
    #[must_use]
    pub fn last_point(&self) -> Option<PathPoint> {
        self.points.last().copied()
    }
}

/// Line layout: one `PathPoint` per `(dataset, label index)`. Series overlay
/// each other, so there is no slot contention.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub frame: CartesianFrame,
    pub series: Vec<LineSeriesLayout>,
    /// Horizontal pixel of every label index.
    pub label_xs: Vec<f64>,
}

#[must_use]
pub fn layout_line(data: &ChartData, viewport: Viewport, padding: Padding) -> LineLayout {
    let frame = CartesianFrame::new(&data.datasets, false, viewport, padding);
    let total = data.labels.len();
    let baseline_y = frame.baseline_y();

    let series = data
        .datasets
        .iter()
        .enumerate()
        .map(|(dataset_index, dataset)| {
            let points: Vec<PathPoint> = dataset
                .data
                .iter()
                .take(total)
                .enumerate()
                .map(|(index, &value)| {
                    let Point { x, y } =
                        project_point(frame.scale, value, index, total, viewport, padding);
                    PathPoint { x, y, value }
                })
                .collect();
            let vertices: Vec<Point> = points.iter().map(|p| p.point()).collect();
            LineSeriesLayout {
                dataset_index,
                line_path: smooth_path(&vertices, DEFAULT_TENSION),
                area_path: area_path(&vertices, baseline_y),
                points,
            }
        })
        .collect();

    let label_xs = (0..total)
        .map(|index| project_point(frame.scale, 0.0, index, total, viewport, padding).x)
        .collect();

    LineLayout {
        frame,
        series,
        label_xs,
    }
}
