use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::dashboard::charts::{Axis, ChartKind, Dataset};
use crate::dashboard::{ChartConfig, ChartData, ChartRenderer, ChartView, RenderError};
use crate::host::surfaces::CanvasSurface;

/// A chart bound to its canvas, as a Chart.js `new Chart(canvas, document)` argument.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedChart {
    pub view: ChartView,
    pub element_id: String,
    pub document: Value,
}

/// Renders charts into Chart.js configuration documents.
#[derive(Debug, Default)]
pub struct JsonChartRenderer {
    created: usize,
}

impl JsonChartRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of charts created so far.
    #[must_use]
    pub const fn created(&self) -> usize {
        self.created
    }
}

impl ChartRenderer<CanvasSurface> for JsonChartRenderer {
    type Handle = RenderedChart;

    fn create_chart(
        &mut self,
        surface: &CanvasSurface,
        kind: ChartKind,
        data: &ChartData,
        config: &ChartConfig,
    ) -> Result<RenderedChart, RenderError> {
        if surface.element_id.trim().is_empty() {
            return Err(RenderError::InvalidSurface(format!(
                "no element id for {}",
                surface.view.as_str()
            )));
        }

        if let Some(dataset) = data
            .datasets
            .iter()
            .find(|d| d.data.len() != data.labels.len())
        {
            return Err(RenderError::Rejected(format!(
                "dataset {:?} has {} points for {} labels",
                dataset.label.as_deref().unwrap_or("unnamed"),
                dataset.data.len(),
                data.labels.len()
            )));
        }

        let document = json!({
            "type": kind,
            "data": {
                "labels": data.labels,
                "datasets": data.datasets.iter().map(dataset_json).collect::<Vec<_>>(),
            },
            "options": options_json(config),
        });

        self.created += 1;
        tracing::debug!(
            view = surface.view.as_str(),
            element_id = %surface.element_id,
            "chart_created"
        );

        Ok(RenderedChart {
            view: surface.view,
            element_id: surface.element_id.clone(),
            document,
        })
    }
}

fn dataset_json(dataset: &Dataset) -> Value {
    let mut out = Map::new();
    if let Some(label) = &dataset.label {
        out.insert("label".into(), json!(label));
    }
    out.insert("data".into(), json!(dataset.data));
    if let Some(color) = dataset.border_color {
        out.insert("borderColor".into(), json!(color));
    }
    // Line fills take a single colour, pie slices a list
    let background = match dataset.background_colors.as_slice() {
        [single] if dataset.fill => json!(single),
        colors => json!(colors),
    };
    out.insert("backgroundColor".into(), background);
    if dataset.fill {
        out.insert("fill".into(), json!(true));
    }
    if let Some(axis) = dataset.axis {
        out.insert("yAxisID".into(), json!(axis.as_str()));
    }
    Value::Object(out)
}

fn axis_json(axis: &Axis) -> Value {
    let mut out = Map::new();
    if let Some(position) = axis.position {
        out.insert("type".into(), json!("linear"));
        out.insert("display".into(), json!(true));
        out.insert("position".into(), json!(position.as_str()));
    }
    if axis.begin_at_zero {
        out.insert("beginAtZero".into(), json!(true));
    }
    if !axis.grid_on_chart_area {
        out.insert("grid".into(), json!({ "drawOnChartArea": false }));
    }
    out.insert(
        "title".into(),
        json!({ "display": true, "text": axis.title }),
    );
    Value::Object(out)
}

fn options_json(config: &ChartConfig) -> Value {
    let mut out = Map::new();
    out.insert("responsive".into(), json!(config.responsive));

    if let Some(interaction) = config.interaction {
        out.insert(
            "interaction".into(),
            json!({ "mode": "index", "intersect": interaction.intersect }),
        );
    }

    if !config.axes.is_empty() {
        let scales: Map<String, Value> = config
            .axes
            .iter()
            .map(|axis| (axis.id.as_str().to_string(), axis_json(axis)))
            .collect();
        out.insert("scales".into(), Value::Object(scales));
    }

    if let Some(position) = config.legend_position {
        out.insert(
            "plugins".into(),
            json!({ "legend": { "position": position.as_str() } }),
        );
    }

    Value::Object(out)
}
