use crate::application::instance_slot::InstanceSlot;
use crate::application::ports::{BreedSelector, DogView, RenderResource};
use crate::domain::dogs::{
    BreedCatalog, BreedDetails, BreedKey, BreedListing, CarouselImage, CarouselSpec,
};
use crate::domain::errors::AppError;
use crate::domain::logging::LogComponent;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http::{HttpClient, dog_api::DogApiClient, dog_ceo::DogCeoClient};
use crate::time_utils::settle;
use crate::{log_info, log_warn};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Use Case: the dogs page. Random-image carousel and the breed browser.
pub struct DogPanel<H, C, V>
where
    C: RenderResource<Spec = CarouselSpec>,
{
    images: DogCeoClient<H>,
    breeds: DogApiClient<H>,
    image_count: usize,
    settle_delay: Duration,
    view: Rc<V>,
    carousel: RefCell<InstanceSlot<C>>,
    catalog: RefCell<BreedCatalog>,
}

impl<H, C, V> DogPanel<H, C, V>
where
    H: HttpClient + Clone,
    C: RenderResource<Spec = CarouselSpec>,
    V: DogView,
{
    pub fn new(http: H, config: &AppConfig, carousel: C, view: Rc<V>) -> Self {
        Self {
            images: DogCeoClient::new(http.clone(), config),
            breeds: DogApiClient::new(http, config),
            image_count: config.carousel_images,
            settle_delay: config.slider_settle,
            view,
            carousel: RefCell::new(InstanceSlot::new(carousel)),
            catalog: RefCell::new(BreedCatalog::default()),
        }
    }

    /// Both page-load flows; they run independently of each other
    pub async fn setup(&self) {
        futures::join!(self.load_carousel(), self.load_breeds());
    }

    pub async fn load_carousel(&self) {
        self.view.set_carousel_error("");

        let urls = match self.images.random_images(self.image_count).await {
            Ok(urls) => urls,
            Err(e) => {
                log_warn!(LogComponent::Application("DogPanel"), "Error fetching random dog images: {e}");
                self.carousel.borrow_mut().clear();
                self.view
                    .set_carousel_error(&format!("Error loading dog images: {e}"));
                return;
            }
        };

        let spec = CarouselSpec { slides: urls.len() };
        // The old slider must let go of its slides before they are replaced
        self.carousel.borrow_mut().clear();
        self.view
            .show_carousel(urls.into_iter().map(CarouselImage::new).collect());

        // Let the freshly rendered slides reach the DOM before the slider looks for them.
        settle(self.settle_delay).await;

        let mounted = self.carousel.borrow_mut().replace(&spec);
        match mounted {
            Ok(()) => log_info!(
                LogComponent::Application("DogPanel"),
                "Carousel initialised with {} slides",
                spec.slides
            ),
            Err(e) => {
                log_warn!(LogComponent::Application("DogPanel"), "carousel init failed: {e}");
                let message = match e {
                    AppError::LibraryUnavailable(_) => "Error: Image slider library object not found.",
                    _ => "Error initializing image carousel.",
                };
                self.view.set_carousel_error(message);
            }
        }
    }

    pub async fn load_breeds(&self) {
        self.view.set_breed_error("");
        self.view.show_breeds(BreedListing::Loading);

        match self.breeds.breeds().await {
            Ok(breeds) => {
                let buttons = self.catalog.borrow_mut().replace(breeds);
                self.view.show_breeds(BreedListing::from_buttons(buttons));
            }
            Err(e) => {
                log_warn!(LogComponent::Application("DogPanel"), "Error fetching dog breeds: {e}");
                self.catalog.borrow_mut().clear();
                self.view
                    .set_breed_error(&format!("Error loading dog breeds: {e}"));
                self.view.show_breeds(BreedListing::Failed);
            }
        }
    }

    /// Button click: show the record behind `key`. Stale keys are ignored.
    pub fn select_breed(&self, key: BreedKey) -> bool {
        let details = self.catalog.borrow().get(key).map(BreedDetails::from);
        match details {
            Some(details) => {
                self.view.show_breed_details(details);
                true
            }
            None => false,
        }
    }

    pub fn carousel_is_live(&self) -> bool {
        self.carousel.borrow().is_live()
    }

    pub fn breed_count(&self) -> usize {
        self.catalog.borrow().len()
    }
}

impl<H, C, V> BreedSelector for DogPanel<H, C, V>
where
    H: HttpClient + Clone,
    C: RenderResource<Spec = CarouselSpec>,
    V: DogView,
{
    fn select_breed_named(&self, name: &str) -> bool {
        let key = self.catalog.borrow().find_by_name(name);
        key.is_some_and(|key| self.select_breed(key))
    }
}
