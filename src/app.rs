use leptos::*;
use std::rc::Rc;

use crate::{
    application::{
        ports::SpeechEngine,
        use_cases::{DogPanel, QuoteLoader, StockPanel},
        voice_router::VoiceRouter,
    },
    domain::{
        dogs::{BreedDetails, BreedListing, CarouselImage},
        logging::LogComponent,
        market_data::{DayRange, SentimentTable},
        page::{PageContext, nav_links},
    },
    infrastructure::{
        config::AppConfig,
        http::GlooHttpClient,
        js::{annyang::AnnyangEngine, chart_js::ChartJsSurface, simple_slider::SimpleSliderCarousel},
    },
    log_info, log_warn,
    presentation::{
        ids,
        views::{DogSignals, PageSignals, QuoteSignals, StockSignals},
    },
};

type StockPage = StockPanel<GlooHttpClient, ChartJsSurface, StockSignals>;
type DogPage = DogPanel<GlooHttpClient, SimpleSliderCarousel, DogSignals>;

/// Page shell: navigation, audio controls, voice help and the page body
#[component]
pub fn App(page: PageContext, config: AppConfig) -> impl IntoView {
    let host = PageSignals::new();
    let http = GlooHttpClient::new();
    let mut router = VoiceRouter::new(page, Rc::new(host)).with_voice_range(config.voice_lookup_range);

    let body = match page {
        PageContext::Home => {
            let quote = QuoteSignals::new();
            let loader = QuoteLoader::new(http, &config, Rc::new(quote));
            spawn_local(async move { loader.load().await });
            view! { <HomeSection quote=quote/> }.into_view()
        }
        PageContext::Stocks => {
            let signals = StockSignals::new();
            let panel = Rc::new(StockPanel::new(
                http,
                &config,
                ChartJsSurface::new(ids::STOCK_CHART),
                Rc::new(signals),
            ));
            router = router.with_stock_lookup(panel.clone());
            let loader = panel.clone();
            spawn_local(async move { loader.load_sentiment().await });
            view! { <StocksSection panel=panel signals=signals/> }.into_view()
        }
        PageContext::Dogs => {
            let signals = DogSignals::new();
            let panel = Rc::new(DogPanel::new(
                http,
                &config,
                SimpleSliderCarousel::new(ids::DOG_CAROUSEL),
                Rc::new(signals),
            ));
            router = router.with_breed_selector(panel.clone());
            let loader = panel.clone();
            spawn_local(async move { loader.setup().await });
            view! { <DogsSection panel=panel signals=signals/> }.into_view()
        }
    };

    let router = Rc::new(router);
    let engine = AnnyangEngine::detect().map(|engine| engine as Rc<dyn SpeechEngine>);
    router.install(engine);
    log_info!(LogComponent::Presentation("App"), "{page} mounted");

    let phrases: Vec<&'static str> = router
        .commands()
        .iter()
        .map(|command| command.pattern.phrase())
        .collect();

    view! {
        <style>{STYLES}</style>
        <Nav current=page/>
        <main class="page">
            <h1>{page.title()}</h1>
            <AudioControls router=router status=host.status/>
            <CommandHelp page=page phrases=phrases/>
            {body}
        </main>
    }
}

const STYLES: &str = r#"
nav ul { list-style: none; display: flex; gap: 16px; padding: 0; }
.page { font-family: -apple-system, BlinkMacSystemFont, sans-serif; max-width: 960px; margin: 0 auto; }
.error { color: #c0392b; min-height: 1em; }
.voice-commands li { font-family: monospace; }
.sentiment-bullish { color: #27ae60; }
.sentiment-bearish { color: #c0392b; }
#dog-carousel { position: relative; height: 320px; overflow: hidden; }
#dog-carousel img { height: 320px; object-fit: cover; }
.button-style-dogs { margin: 4px; }
"#;

#[component]
fn Nav(current: PageContext) -> impl IntoView {
    view! {
        <nav>
            <ul>
                {nav_links(current)
                    .into_iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a
                                    href=link.page.href()
                                    style:font-weight=link.font_weight()
                                    style:text-decoration=link.text_decoration()
                                >
                                    {link.page.title()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[component]
fn AudioControls(router: Rc<VoiceRouter>, status: RwSignal<String>) -> impl IntoView {
    let starter = router.clone();
    view! {
        <div class="audio-controls">
            <button id=ids::START_AUDIO on:click=move |_| starter.start()>"Start Listening"</button>
            <button id=ids::STOP_AUDIO on:click=move |_| router.stop()>"Stop Listening"</button>
            <p id=ids::AUDIO_STATUS>{move || status.get()}</p>
        </div>
    }
}

/// "Say one of these" block for the current page
#[component]
fn CommandHelp(page: PageContext, phrases: Vec<&'static str>) -> impl IntoView {
    view! {
        <div id=page.commands_block_id() class="voice-commands">
            <h3>"Voice commands"</h3>
            <ul>
                {phrases
                    .into_iter()
                    .map(|phrase| view! { <li>{format!("\"{phrase}\"")}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn HomeSection(quote: QuoteSignals) -> impl IntoView {
    view! {
        <section class="quote">
            <p id=ids::QUOTE_TEXT>{move || quote.text.get()}</p>
            <p id=ids::QUOTE_AUTHOR>{move || quote.author.get()}</p>
        </section>
    }
}

#[component]
fn StocksSection(panel: Rc<StockPage>, signals: StockSignals) -> impl IntoView {
    let look_up = move |_: ev::MouseEvent| {
        let panel = panel.clone();
        spawn_local(async move { panel.look_up_from_inputs().await });
    };

    view! {
        <section class="stock-lookup">
            <input
                id=ids::STOCK_TICKER
                type="text"
                placeholder="e.g. AAPL"
                prop:value=move || signals.ticker.get()
                on:input=move |ev| signals.ticker.set(event_target_value(&ev))
            />
            <select
                id=ids::TIME_RANGE
                on:change=move |ev| signals.range.set(event_target_value(&ev))
            >
                {DayRange::CHOICES
                    .into_iter()
                    .map(|days| {
                        let value = days.to_string();
                        let selected = value.clone();
                        view! {
                            <option value=value prop:selected=move || signals.range.get() == selected>
                                {format!("Last {days} days")}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <button id=ids::GET_CHART on:click=look_up>"Get Chart"</button>
            <p id=ids::CHART_ERROR class="error">{move || signals.chart_error.get()}</p>
            <canvas id=ids::STOCK_CHART></canvas>
        </section>
        <section class="sentiment">
            <h2>"Top Reddit Stocks"</h2>
            <table id=ids::REDDIT_TABLE>
                <thead>
                    <tr>
                        <th>"Ticker"</th>
                        <th>"Comments"</th>
                        <th>"Sentiment"</th>
                    </tr>
                </thead>
                <tbody>{move || sentiment_rows(signals.sentiment.get())}</tbody>
            </table>
            <p id=ids::REDDIT_ERROR class="error">{move || signals.sentiment_error.get()}</p>
        </section>
    }
}

fn sentiment_rows(table: SentimentTable) -> View {
    match table {
        SentimentTable::Pending => ().into_view(),
        SentimentTable::Empty => view! {
            <tr>
                <td colspan="3">{SentimentTable::EMPTY_MESSAGE}</td>
            </tr>
        }
        .into_view(),
        SentimentTable::Rows(rows) => rows
            .into_iter()
            .map(|row| {
                let link = row.link();
                let class = row.indicator.css_class();
                let indicator = row.indicator.text().to_string();
                view! {
                    <tr>
                        <td>
                            <a href=link target="_blank">{row.ticker}</a>
                        </td>
                        <td>{row.comments}</td>
                        <td>
                            <span class=class>{indicator}</span>
                        </td>
                    </tr>
                }
            })
            .collect_view(),
    }
}

#[component]
fn DogsSection(panel: Rc<DogPage>, signals: DogSignals) -> impl IntoView {
    let detail = move |field: fn(&BreedDetails) -> String| {
        move || signals.details.with(|details| details.as_ref().map(field).unwrap_or_default())
    };

    view! {
        <section class="carousel">
            <div id=ids::DOG_CAROUSEL>
                {move || {
                    signals
                        .images
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, image)| {
                            view! {
                                <img
                                    src=image.url
                                    alt=image.alt
                                    on:error=move |ev| {
                                        log_warn!(
                                            LogComponent::Presentation("DogsSection"),
                                            "Failed to load image #{index}"
                                        );
                                        signals.mark_broken(index);
                                        event_target::<web_sys::HtmlImageElement>(&ev)
                                            .set_alt(CarouselImage::ALT_BROKEN);
                                    }
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>
            <p id=ids::CAROUSEL_ERROR class="error">{move || signals.carousel_error.get()}</p>
        </section>
        <section class="breeds">
            <h2>"Dog Breeds"</h2>
            <div id=ids::BREED_BUTTONS>{move || breed_buttons(&panel, signals.breeds.get())}</div>
            <p id=ids::BREED_ERROR class="error">{move || signals.breed_error.get()}</p>
            <div
                id=ids::BREED_INFO
                style:display=move || {
                    if signals.details.with(Option::is_some) { "block" } else { "none" }
                }
            >
                <h3 id=ids::BREED_NAME>{detail(|d| d.name.clone())}</h3>
                <p id=ids::BREED_DESCRIPTION>{detail(|d| d.description.clone())}</p>
                <p>
                    "Life expectancy: " <span id=ids::BREED_LIFE_MIN>{detail(|d| d.life_min.clone())}</span>
                    " - " <span id=ids::BREED_LIFE_MAX>{detail(|d| d.life_max.clone())}</span> " years"
                </p>
            </div>
        </section>
    }
}

fn breed_buttons(panel: &Rc<DogPage>, listing: BreedListing) -> View {
    if let Some(text) = listing.placeholder() {
        return view! { <p>{text}</p> }.into_view();
    }
    let BreedListing::Buttons(buttons) = listing else {
        return ().into_view();
    };
    buttons
        .into_iter()
        .map(|button| {
            let panel = panel.clone();
            view! {
                <button class="button-style-dogs" on:click=move |_| {
                    panel.select_breed(button.key);
                }>
                    {button.label}
                </button>
            }
        })
        .collect_view()
}
