use serde_json::{Value, json};

/// Line colour used for the closing-price dataset
pub const LINE_COLOR: &str = "rgb(75, 192, 192)";

/// Everything needed to draw one closing-price line chart
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartSpec {
    pub title: String,
    pub dataset_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl LineChartSpec {
    /// Chart.js configuration object for this spec
    pub fn to_chartjs_config(&self) -> Value {
        json!({
            "type": "line",
            "data": {
                "labels": self.labels,
                "datasets": [{
                    "label": self.dataset_label,
                    "data": self.values,
                    "borderColor": LINE_COLOR,
                    "tension": 0.1,
                    "fill": false
                }]
            },
            "options": {
                "responsive": true,
                "maintainAspectRatio": true,
                "scales": { "y": { "beginAtZero": false } },
                "plugins": {
                    "title": { "display": true, "text": self.title }
                }
            }
        })
    }
}
