use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

/// The page this load is rendering. Fixed for the lifetime of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum PageContext {
    #[strum(serialize = "home.html")]
    Home,
    #[strum(serialize = "stocks.html")]
    Stocks,
    #[strum(serialize = "dogs.html")]
    Dogs,
}

impl PageContext {
    /// Resolve from a location pathname. An empty last segment means `home.html`;
    /// unrecognised files also land on Home.
    pub fn from_path(pathname: &str) -> Self {
        let file = pathname.rsplit('/').next().unwrap_or_default();
        let file = if file.is_empty() { "home.html" } else { file };
        Self::iter()
            .find(|page| page.href() == file)
            .unwrap_or(PageContext::Home)
    }

    pub fn href(&self) -> &'static str {
        match self {
            PageContext::Home => "home.html",
            PageContext::Stocks => "stocks.html",
            PageContext::Dogs => "dogs.html",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PageContext::Home => "Home",
            PageContext::Stocks => "Stocks",
            PageContext::Dogs => "Dogs",
        }
    }

    /// Id of the per-page voice help block
    pub fn commands_block_id(&self) -> &'static str {
        match self {
            PageContext::Home => "home-commands",
            PageContext::Stocks => "stocks-commands",
            PageContext::Dogs => "dogs-commands",
        }
    }

    /// Map a spoken page name onto a page. Input is lowercased and trimmed first.
    pub fn from_spoken(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "home" | "homepage" => Some(PageContext::Home),
            "stocks" | "stock" => Some(PageContext::Stocks),
            "dogs" | "dog" => Some(PageContext::Dogs),
            _ => None,
        }
    }
}

/// One entry of the top navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub page: PageContext,
    pub active: bool,
}

impl NavLink {
    pub fn font_weight(&self) -> &'static str {
        if self.active { "bold" } else { "normal" }
    }

    pub fn text_decoration(&self) -> &'static str {
        if self.active { "underline" } else { "none" }
    }
}

/// Navigation links in display order, with the current page marked active.
pub fn nav_links(current: PageContext) -> Vec<NavLink> {
    PageContext::iter()
        .map(|page| NavLink {
            page,
            active: page.href() == current.href(),
        })
        .collect()
}
