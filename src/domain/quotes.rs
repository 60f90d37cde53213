/// A quote as shown on the home page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub const UNAVAILABLE: &'static str = "Could not load quote.";

    pub fn display_text(&self) -> String {
        format!("\"{}\"", self.text)
    }

    pub fn display_author(&self) -> String {
        format!("- {}", self.author)
    }
}
