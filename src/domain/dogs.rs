//! Dog breeds and carousel images.

/// Required breed record; entries missing any of these fields are never built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogBreed {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub life_min: u32,
    pub life_max: u32,
}

/// Opaque handle a rendered button carries back to its catalog record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BreedKey {
    generation: u32,
    index: usize,
}

/// What the button container needs to draw one breed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedButton {
    pub key: BreedKey,
    pub label: String,
}

/// Typed records behind the currently rendered breed buttons
#[derive(Debug, Default)]
pub struct BreedCatalog {
    generation: u32,
    breeds: Vec<DogBreed>,
}

impl BreedCatalog {
    /// Swap in a new set of breeds. Keys issued for the previous set stop resolving.
    pub fn replace(&mut self, breeds: Vec<DogBreed>) -> Vec<BreedButton> {
        self.generation = self.generation.wrapping_add(1);
        self.breeds = breeds;
        self.buttons()
    }

    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    pub fn buttons(&self) -> Vec<BreedButton> {
        self.breeds
            .iter()
            .enumerate()
            .map(|(index, breed)| BreedButton {
                key: BreedKey {
                    generation: self.generation,
                    index,
                },
                label: breed.name.clone(),
            })
            .collect()
    }

    pub fn get(&self, key: BreedKey) -> Option<&DogBreed> {
        if key.generation != self.generation {
            return None;
        }
        self.breeds.get(key.index)
    }

    /// First breed whose name equals `name`, ignoring case and surrounding whitespace
    pub fn find_by_name(&self, name: &str) -> Option<BreedKey> {
        let wanted = name.trim().to_lowercase();
        self.breeds
            .iter()
            .position(|breed| breed.name.trim().to_lowercase() == wanted)
            .map(|index| BreedKey {
                generation: self.generation,
                index,
            })
    }

    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }
}

/// Contents of the breed button container
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BreedListing {
    #[default]
    Loading,
    Failed,
    Empty,
    Buttons(Vec<BreedButton>),
}

impl BreedListing {
    pub fn from_buttons(buttons: Vec<BreedButton>) -> Self {
        if buttons.is_empty() {
            BreedListing::Empty
        } else {
            BreedListing::Buttons(buttons)
        }
    }

    /// Paragraph shown instead of buttons, if any
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            BreedListing::Loading => Some("Loading breeds..."),
            BreedListing::Failed => Some("Could not load breeds."),
            BreedListing::Empty => Some("No breeds found."),
            BreedListing::Buttons(_) => None,
        }
    }
}

/// Text for the breed detail panel, placeholders already applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedDetails {
    pub name: String,
    pub description: String,
    pub life_min: String,
    pub life_max: String,
}

impl BreedDetails {
    pub fn new(
        name: Option<&str>,
        description: Option<&str>,
        life_min: Option<u32>,
        life_max: Option<u32>,
    ) -> Self {
        fn present(value: Option<&str>) -> Option<&str> {
            value.filter(|text| !text.trim().is_empty())
        }
        Self {
            name: present(name).unwrap_or("N/A").to_string(),
            description: present(description)
                .unwrap_or("No description available.")
                .to_string(),
            life_min: life_min.map_or_else(|| "?".to_string(), |n| n.to_string()),
            life_max: life_max.map_or_else(|| "?".to_string(), |n| n.to_string()),
        }
    }
}

impl From<&DogBreed> for BreedDetails {
    fn from(breed: &DogBreed) -> Self {
        BreedDetails::new(
            Some(&breed.name),
            breed.description.as_deref(),
            Some(breed.life_min),
            Some(breed.life_max),
        )
    }
}

/// One slide in the image carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselImage {
    pub url: String,
    pub alt: String,
}

impl CarouselImage {
    pub const ALT: &'static str = "Random Dog";
    pub const ALT_BROKEN: &'static str = "Image failed to load";

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: Self::ALT.to_string(),
        }
    }

    /// Keep the slide but say the image did not load
    pub fn mark_broken(&mut self) {
        self.alt = Self::ALT_BROKEN.to_string();
    }
}

/// What the slider library is asked to mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSpec {
    pub slides: usize,
}
