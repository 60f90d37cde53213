//! Routes recognised phrases to page actions and mirrors engine callbacks
//! into the audio status line.

use crate::application::ports::{
    BreedSelector, CommandHandler, EventHandler, PageHost, SpeechEngine, TickerLookup,
};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::DayRange;
use crate::domain::page::PageContext;
use crate::domain::voice::{
    EngineEvent, ListenOptions, ListeningState, VoiceAction, VoiceCommand, command_table,
    match_utterance,
};
use crate::{log_error, log_info, log_warn};
use futures::FutureExt;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub const LIBRARY_MISSING: &str = "Error: Audio library failed to load.";

pub struct VoiceRouter {
    page: PageContext,
    host: Rc<dyn PageHost>,
    commands: Vec<VoiceCommand>,
    voice_range: DayRange,
    stocks: Option<Rc<dyn TickerLookup>>,
    breeds: Option<Rc<dyn BreedSelector>>,
    engine: RefCell<Option<Rc<dyn SpeechEngine>>>,
    state: Cell<ListeningState>,
}

impl VoiceRouter {
    pub fn new(page: PageContext, host: Rc<dyn PageHost>) -> Self {
        Self {
            page,
            host,
            commands: command_table(page),
            voice_range: DayRange::VOICE_DEFAULT,
            stocks: None,
            breeds: None,
            engine: RefCell::new(None),
            state: Cell::new(ListeningState::Stopped),
        }
    }

    /// Range selected by "look up"; defaults to 30 days
    pub fn with_voice_range(mut self, range: DayRange) -> Self {
        self.voice_range = range;
        self
    }

    pub fn with_stock_lookup(mut self, stocks: Rc<dyn TickerLookup>) -> Self {
        self.stocks = Some(stocks);
        self
    }

    pub fn with_breed_selector(mut self, breeds: Rc<dyn BreedSelector>) -> Self {
        self.breeds = Some(breeds);
        self
    }

    pub fn page(&self) -> PageContext {
        self.page
    }

    /// Phrases registered for this page, in registration order
    pub fn commands(&self) -> &[VoiceCommand] {
        &self.commands
    }

    pub fn state(&self) -> ListeningState {
        self.state.get()
    }

    pub fn is_enabled(&self) -> bool {
        self.engine.borrow().is_some()
    }

    /// Register commands and callbacks with `engine`.
    ///
    /// With no engine the router stays disabled and reports it once; it never retries.
    pub fn install(self: &Rc<Self>, engine: Option<Rc<dyn SpeechEngine>>) -> bool {
        let Some(engine) = engine else {
            log_error!(LogComponent::Application("VoiceRouter"), "Speech engine not loaded");
            self.host.set_status(LIBRARY_MISSING);
            return false;
        };

        let weak = Rc::downgrade(self);
        let on_command: CommandHandler = Rc::new(move |action, capture| {
            let router = weak.upgrade();
            async move {
                if let Some(router) = router {
                    router.dispatch(action, capture).await;
                }
            }
            .boxed_local()
        });

        let weak = Rc::downgrade(self);
        let on_event: EventHandler = Rc::new(move |event| {
            if let Some(router) = weak.upgrade() {
                router.handle_event(event);
            }
        });

        engine.add_commands(&self.commands, on_command);
        engine.add_callbacks(on_event);
        *self.engine.borrow_mut() = Some(engine);

        log_info!(
            LogComponent::Application("VoiceRouter"),
            "Registered {} voice commands for {}",
            self.commands.len(),
            self.page
        );
        true
    }

    pub fn start(&self) {
        let engine = self.engine.borrow().clone();
        match engine {
            Some(engine) => {
                engine.start(ListenOptions::default());
                self.state.set(ListeningState::Listening);
                self.host.set_status("Audio listening activated.");
            }
            None => {
                log_error!(LogComponent::Application("VoiceRouter"), "Cannot start: engine not available");
                self.host.set_status("Error: Cannot start audio.");
            }
        }
    }

    pub fn stop(&self) {
        let engine = self.engine.borrow().clone();
        match engine {
            Some(engine) => {
                engine.abort();
                self.state.set(ListeningState::Stopped);
                self.host.set_status("Audio listening deactivated.");
            }
            None => {
                log_error!(LogComponent::Application("VoiceRouter"), "Cannot stop: engine not available");
                self.host.set_status("Error: Cannot stop audio.");
            }
        }
    }

    /// Route a typed or scripted utterance through the same phrase table the engine uses
    pub async fn handle_utterance(&self, utterance: &str) {
        match match_utterance(&self.commands, utterance) {
            Some((action, capture)) => self.dispatch(action, capture).await,
            None => self
                .host
                .set_status(&format!("No command matched \"{}\".", utterance.trim())),
        }
    }

    pub async fn dispatch(&self, action: VoiceAction, capture: Option<String>) {
        let capture = capture.unwrap_or_default();
        log_info!(
            LogComponent::Application("VoiceRouter"),
            "Voice command: {action:?} {capture}"
        );
        match action {
            VoiceAction::Greet => {
                self.host.set_status("Hello World");
                self.host.alert("Hello World");
            }
            VoiceAction::ChangeColor => {
                self.host.set_background_color(&capture);
                self.host
                    .set_status(&format!("Changed background color to {capture}."));
            }
            VoiceAction::Navigate => self.navigate(&capture),
            VoiceAction::LookUpTicker => self.look_up(&capture).await,
            VoiceAction::LoadBreed => self.load_breed(&capture),
        }
    }

    fn navigate(&self, spoken: &str) {
        let name = spoken.trim().to_lowercase();
        self.host.set_status(&format!("Navigating to {name}..."));
        match PageContext::from_spoken(&name) {
            Some(page) => self.host.navigate(page),
            None => {
                log_warn!(
                    LogComponent::Application("VoiceRouter"),
                    "Navigation failed: Unknown page \"{spoken}\""
                );
                self.host.set_status(&format!(
                    "Sorry, I don't know the page \"{spoken}\". Try 'Home', 'Stocks', or 'Dogs'."
                ));
            }
        }
    }

    async fn look_up(&self, spoken: &str) {
        let Some(stocks) = self.stocks.clone() else {
            log_error!(LogComponent::Application("VoiceRouter"), "Stock panel not present");
            self.host
                .set_status("Error: Could not find stock lookup elements.");
            return;
        };
        let ticker = spoken.to_uppercase();
        self.host.set_status(&format!(
            "Looking up {ticker} for {} days...",
            self.voice_range.days()
        ));
        stocks.look_up(ticker, self.voice_range).await;
    }

    fn load_breed(&self, spoken: &str) {
        let Some(breeds) = self.breeds.as_ref() else {
            log_error!(LogComponent::Application("VoiceRouter"), "Breed panel not present");
            self.host.set_status("Error: Cannot find breed buttons.");
            return;
        };
        if breeds.select_breed_named(spoken) {
            self.host.set_status(&format!("Loading info for {spoken}..."));
        } else {
            log_warn!(
                LogComponent::Application("VoiceRouter"),
                "Dog breed \"{spoken}\" not found among buttons"
            );
            self.host.set_status(&format!(
                "Sorry, I couldn't find the breed \"{spoken}\". Please check the spelling or try another breed."
            ));
        }
    }

    pub fn handle_event(&self, event: EngineEvent) {
        match event {
            EngineEvent::Result(phrases) => {
                let heard = phrases.first().map(String::as_str).unwrap_or_default();
                self.host.set_status(&format!("Heard: \"{heard}\""));
            }
            EngineEvent::Error(code) => {
                log_error!(LogComponent::Application("VoiceRouter"), "Engine error: {code:?}");
                let code = code.as_deref().unwrap_or("Unknown error");
                self.host.set_status(&format!("Audio Error: {code}"));
            }
            EngineEvent::NetworkError => self.host.set_status("Audio Error: Network issue."),
            EngineEvent::PermissionBlocked => {
                self.host
                    .set_status("Audio Error: Permission denied by browser.");
                self.host.alert(
                    "Microphone permission denied. Please allow microphone access in your browser settings.",
                );
            }
            EngineEvent::PermissionDenied => {
                self.host.set_status("Audio Error: Permission denied by user.");
                self.host.alert("You denied microphone permission.");
            }
        }
    }
}
