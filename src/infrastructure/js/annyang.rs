use super::{js_failure, method, read_global, set};
use crate::application::ports::{CommandHandler, EventHandler, SpeechEngine};
use crate::domain::errors::AppResult;
use crate::domain::logging::LogComponent;
use crate::domain::voice::{EngineEvent, ListenOptions, VoiceCommand};
use crate::log_error;
use js_sys::{Array, Object, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

/// The global `annyang` object. It is `null` in browsers without speech recognition.
pub struct AnnyangEngine {
    annyang: JsValue,
    // Registered callbacks must outlive the page
    closures: RefCell<Vec<Closure<dyn Fn(JsValue)>>>,
}

impl AnnyangEngine {
    pub fn detect() -> Option<Rc<Self>> {
        read_global("annyang").map(|annyang| {
            Rc::new(Self {
                annyang,
                closures: RefCell::new(Vec::new()),
            })
        })
    }

    fn call(&self, name: &str, args: &[&JsValue]) -> AppResult<()> {
        let function = method(&self.annyang, name)?;
        let result = match args {
            [] => function.call0(&self.annyang),
            [first] => function.call1(&self.annyang, first),
            [first, second, ..] => function.call2(&self.annyang, first, second),
        };
        result.map(|_| ()).map_err(js_failure)
    }

    fn keep(&self, closure: Closure<dyn Fn(JsValue)>) {
        self.closures.borrow_mut().push(closure);
    }

    fn register_commands(&self, commands: &[VoiceCommand], handler: CommandHandler) -> AppResult<()> {
        let table = JsValue::from(Object::new());
        for command in commands {
            let handler = handler.clone();
            let action = command.action;
            let callback = Closure::<dyn Fn(JsValue)>::new(move |capture: JsValue| {
                wasm_bindgen_futures::spawn_local(handler(action, capture.as_string()));
            });
            set(&table, command.pattern.phrase(), callback.as_ref())?;
            self.keep(callback);
        }
        self.call("addCommands", &[&table])
    }

    fn register_callback(
        &self,
        event: &str,
        handler: &EventHandler,
        to_event: fn(JsValue) -> EngineEvent,
    ) -> AppResult<()> {
        let handler = handler.clone();
        let callback = Closure::<dyn Fn(JsValue)>::new(move |payload: JsValue| {
            handler(to_event(payload));
        });
        self.call("addCallback", &[&JsValue::from_str(event), callback.as_ref()])?;
        self.keep(callback);
        Ok(())
    }
}

fn heard_phrases(payload: JsValue) -> EngineEvent {
    let phrases = Array::from(&payload)
        .iter()
        .filter_map(|phrase| phrase.as_string())
        .collect();
    EngineEvent::Result(phrases)
}

fn engine_error(payload: JsValue) -> EngineEvent {
    let code = Reflect::get(&payload, &JsValue::from_str("error"))
        .ok()
        .and_then(|code| code.as_string())
        .filter(|code| !code.is_empty());
    EngineEvent::Error(code)
}

impl SpeechEngine for AnnyangEngine {
    fn add_commands(&self, commands: &[VoiceCommand], handler: CommandHandler) {
        if let Err(e) = self.register_commands(commands, handler) {
            log_error!(LogComponent::Infrastructure("Annyang"), "addCommands failed: {e}");
        }
    }

    fn add_callbacks(&self, handler: EventHandler) {
        let callbacks: [(&str, fn(JsValue) -> EngineEvent); 5] = [
            ("result", heard_phrases),
            ("error", engine_error),
            ("errorNetwork", |_| EngineEvent::NetworkError),
            ("errorPermissionBlocked", |_| EngineEvent::PermissionBlocked),
            ("errorPermissionDenied", |_| EngineEvent::PermissionDenied),
        ];
        for (event, to_event) in callbacks {
            if let Err(e) = self.register_callback(event, &handler, to_event) {
                log_error!(LogComponent::Infrastructure("Annyang"), "addCallback({event}) failed: {e}");
            }
        }
    }

    fn start(&self, options: ListenOptions) {
        let started = (|| {
            let js_options = JsValue::from(Object::new());
            set(&js_options, "autoRestart", &JsValue::from_bool(options.auto_restart))?;
            set(&js_options, "continuous", &JsValue::from_bool(options.continuous))?;
            self.call("start", &[&js_options])
        })();
        if let Err(e) = started {
            log_error!(LogComponent::Infrastructure("Annyang"), "start failed: {e}");
        }
    }

    fn abort(&self) {
        if let Err(e) = self.call("abort", &[]) {
            log_error!(LogComponent::Infrastructure("Annyang"), "abort failed: {e}");
        }
    }
}
