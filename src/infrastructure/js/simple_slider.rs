use super::{js_failure, method, require_global, set};
use crate::application::ports::RenderResource;
use crate::domain::dogs::CarouselSpec;
use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_warn};
use js_sys::Object;
use wasm_bindgen::JsValue;

const LIBRARY: &str = "simpleslider";

/// `simpleslider.getSlider({ container })` over the carousel element
pub struct SimpleSliderCarousel {
    container_id: String,
}

pub struct SliderHandle {
    slider: JsValue,
}

impl SimpleSliderCarousel {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
        }
    }
}

impl RenderResource for SimpleSliderCarousel {
    type Spec = CarouselSpec;
    type Instance = SliderHandle;

    fn create(&self, spec: &CarouselSpec) -> AppResult<SliderHandle> {
        let library = require_global(LIBRARY)?;
        let get_slider = method(&library, "getSlider")?;
        let container = gloo::utils::document()
            .get_element_by_id(&self.container_id)
            .ok_or_else(|| AppError::Rendering(format!("#{} not found", self.container_id)))?;

        let options = Object::new();
        set(&options, "container", &container)?;
        let slider = get_slider.call1(&library, &options).map_err(js_failure)?;
        log_debug!(
            LogComponent::Infrastructure("SimpleSlider"),
            "slider mounted over {} slides",
            spec.slides
        );
        Ok(SliderHandle { slider })
    }

    fn destroy(&self, handle: SliderHandle) {
        let disposed = method(&handle.slider, "dispose")
            .and_then(|dispose| dispose.call0(&handle.slider).map_err(js_failure));
        if let Err(e) = disposed {
            log_warn!(LogComponent::Infrastructure("SimpleSlider"), "slider dispose failed: {e}");
        }
    }
}
