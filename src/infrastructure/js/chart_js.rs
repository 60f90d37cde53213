use super::{js_failure, method, require_global};
use crate::application::ports::RenderResource;
use crate::domain::chart::LineChartSpec;
use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_warn};
use gloo::utils::format::JsValueSerdeExt;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// `new Chart(canvas, config)` on a fixed canvas element
pub struct ChartJsSurface {
    canvas_id: String,
}

/// A live Chart.js object
pub struct ChartHandle {
    chart: JsValue,
}

impl ChartHandle {
    pub fn as_js(&self) -> &JsValue {
        &self.chart
    }
}

impl ChartJsSurface {
    pub fn new(canvas_id: impl Into<String>) -> Self {
        Self {
            canvas_id: canvas_id.into(),
        }
    }
}

impl RenderResource for ChartJsSurface {
    type Spec = LineChartSpec;
    type Instance = ChartHandle;

    fn create(&self, spec: &LineChartSpec) -> AppResult<ChartHandle> {
        let constructor = require_global("Chart")?
            .dyn_into::<Function>()
            .map_err(|_| AppError::LibraryUnavailable("Chart".to_string()))?;
        let canvas = gloo::utils::document()
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| AppError::Rendering(format!("canvas #{} not found", self.canvas_id)))?;
        let config = JsValue::from_serde(&spec.to_chartjs_config())
            .map_err(|e| AppError::Rendering(e.to_string()))?;

        let chart = Reflect::construct(&constructor, &Array::of2(&canvas.into(), &config))
            .map_err(js_failure)?;
        log_debug!(
            LogComponent::Infrastructure("ChartJs"),
            "chart created: {}",
            spec.title
        );
        Ok(ChartHandle { chart })
    }

    fn destroy(&self, handle: ChartHandle) {
        let destroyed = method(&handle.chart, "destroy")
            .and_then(|destroy| destroy.call0(&handle.chart).map_err(js_failure));
        if let Err(e) = destroyed {
            log_warn!(LogComponent::Infrastructure("ChartJs"), "chart destroy failed: {e}");
        }
    }
}
