//! Chart catalogue: which six charts the dashboard shows and how each is configured.

use serde::{Deserialize, Serialize};

use crate::backend::SmokeLevel;
use crate::dashboard::series::{Dimension, SeriesSet};

/// One chart slot on the dashboard, backed by its own rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartView {
    Temperature,
    Smoke,
    Distance,
    Light,
    SmokeLevelPie,
    TempSmokeCompare,
}

impl ChartView {
    pub const ALL: [Self; 6] = [
        Self::Temperature,
        Self::Smoke,
        Self::Distance,
        Self::Light,
        Self::SmokeLevelPie,
        Self::TempSmokeCompare,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Smoke => "smoke",
            Self::Distance => "distance",
            Self::Light => "light",
            Self::SmokeLevelPie => "smoke-level-pie",
            Self::TempSmokeCompare => "temp-smoke-compare",
        }
    }

    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.as_str() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Pie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisId {
    X,
    Y,
    Y1,
}

impl AxisId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Y1 => "y1",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    Left,
    Right,
}

impl Position {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub border_color: Option<&'static str>,
    /// One colour for line fills, one per slice for pies
    pub background_colors: Vec<&'static str>,
    pub fill: bool,
    pub axis: Option<AxisId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub id: AxisId,
    pub title: String,
    /// `None` leaves placement to the renderer's default
    pub position: Option<Position>,
    pub begin_at_zero: bool,
    pub grid_on_chart_area: bool,
}

impl Axis {
    fn titled(id: AxisId, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            position: None,
            begin_at_zero: false,
            grid_on_chart_area: true,
        }
    }
}

/// Hover highlighting across datasets at the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexInteraction {
    pub intersect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    pub responsive: bool,
    pub axes: Vec<Axis>,
    pub legend_position: Option<Position>,
    pub interaction: Option<IndexInteraction>,
}

/// Everything the renderer needs for one chart, minus the surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDefinition {
    pub view: ChartView,
    pub kind: ChartKind,
    pub data: ChartData,
    pub config: ChartConfig,
}

/// Border and translucent fill colour for a dimension.
#[must_use]
pub const fn palette(dimension: Dimension) -> (&'static str, &'static str) {
    match dimension {
        Dimension::Temperature => ("#3cba9f", "rgba(60, 186, 159, 0.2)"),
        Dimension::Smoke => ("#ff6384", "rgba(255, 99, 132, 0.2)"),
        Dimension::Distance => ("#36a2eb", "rgba(54, 162, 235, 0.2)"),
        Dimension::Light => ("#ffce56", "rgba(255, 206, 86, 0.2)"),
    }
}

#[must_use]
pub const fn smoke_level_color(level: SmokeLevel) -> &'static str {
    match level {
        SmokeLevel::Low => "#4caf50",
        SmokeLevel::Medium => "#ff9800",
        SmokeLevel::High => "#f44336",
    }
}

fn line_dataset(series: &SeriesSet, dimension: Dimension, axis: Option<AxisId>) -> Dataset {
    let (border, background) = palette(dimension);
    Dataset {
        label: Some(dimension.legend().to_string()),
        data: series.series(dimension).values(),
        border_color: Some(border),
        background_colors: vec![background],
        fill: true,
        axis,
    }
}

fn line_options(x_title: &str, y_title: &str) -> ChartConfig {
    ChartConfig {
        responsive: true,
        axes: vec![
            Axis::titled(AxisId::X, x_title),
            Axis {
                begin_at_zero: true,
                ..Axis::titled(AxisId::Y, y_title)
            },
        ],
        legend_position: None,
        interaction: None,
    }
}

fn dimension_chart(series: &SeriesSet, view: ChartView, dimension: Dimension) -> ChartDefinition {
    ChartDefinition {
        view,
        kind: ChartKind::Line,
        data: ChartData {
            labels: series.labels.clone(),
            datasets: vec![line_dataset(series, dimension, None)],
        },
        config: line_options("Time", dimension.axis_title()),
    }
}

fn smoke_level_pie(series: &SeriesSet) -> ChartDefinition {
    let counts = series.smoke_levels;
    ChartDefinition {
        view: ChartView::SmokeLevelPie,
        kind: ChartKind::Pie,
        data: ChartData {
            labels: SmokeLevel::ALL.iter().map(|l| l.as_str().to_string()).collect(),
            datasets: vec![Dataset {
                label: None,
                data: SmokeLevel::ALL.iter().map(|l| counts.get(*l) as f64).collect(),
                border_color: None,
                background_colors: SmokeLevel::ALL.iter().map(|l| smoke_level_color(*l)).collect(),
                fill: false,
                axis: None,
            }],
        },
        config: ChartConfig {
            responsive: true,
            axes: vec![],
            legend_position: Some(Position::Top),
            interaction: None,
        },
    }
}

fn temp_smoke_compare(series: &SeriesSet) -> ChartDefinition {
    ChartDefinition {
        view: ChartView::TempSmokeCompare,
        kind: ChartKind::Line,
        data: ChartData {
            labels: series.labels.clone(),
            datasets: vec![
                line_dataset(series, Dimension::Temperature, Some(AxisId::Y)),
                line_dataset(series, Dimension::Smoke, Some(AxisId::Y1)),
            ],
        },
        config: ChartConfig {
            responsive: true,
            axes: vec![
                Axis {
                    position: Some(Position::Left),
                    ..Axis::titled(AxisId::Y, Dimension::Temperature.legend())
                },
                Axis {
                    position: Some(Position::Right),
                    grid_on_chart_area: false,
                    ..Axis::titled(AxisId::Y1, Dimension::Smoke.legend())
                },
                Axis::titled(AxisId::X, "Time"),
            ],
            legend_position: None,
            interaction: Some(IndexInteraction { intersect: false }),
        },
    }
}

/// Build the six chart definitions, in [`ChartView::ALL`] order.
#[must_use]
pub fn build_charts(series: &SeriesSet) -> Vec<ChartDefinition> {
    ChartView::ALL
        .into_iter()
        .map(|view| match view {
            ChartView::Temperature => dimension_chart(series, view, Dimension::Temperature),
            ChartView::Smoke => dimension_chart(series, view, Dimension::Smoke),
            ChartView::Distance => dimension_chart(series, view, Dimension::Distance),
            ChartView::Light => dimension_chart(series, view, Dimension::Light),
            ChartView::SmokeLevelPie => smoke_level_pie(series),
            ChartView::TempSmokeCompare => temp_smoke_compare(series),
        })
        .collect()
}
