use derive_more::Display;

/// Every failure a page flow can surface. The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AppError {
    /// Required input missing or malformed; raised before any request is sent
    #[display(fmt = "{}", _0)]
    Validation(String),
    #[display(fmt = "{}", _0)]
    Network(NetworkError),
    /// Response decoded but its envelope or fields are not what we need
    #[display(fmt = "{}", _0)]
    Payload(String),
    /// A JS library call threw
    #[display(fmt = "{}", _0)]
    Rendering(String),
    /// A JS library global is absent
    #[display(fmt = "{}", _0)]
    LibraryUnavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum NetworkError {
    #[display(fmt = "Stock ticker \"{}\" not found.", _0)]
    TickerNotFound(String),
    #[display(fmt = "API rate limit exceeded. Please wait.")]
    RateLimited,
    #[display(fmt = "HTTP error! status: {}", _0)]
    Status(u16),
    #[display(fmt = "Failed to fetch: {}", _0)]
    Transport(String),
    #[display(fmt = "Failed to parse response: {}", _0)]
    Decode(String),
}

impl std::error::Error for AppError {}
impl std::error::Error for NetworkError {}

impl From<NetworkError> for AppError {
    fn from(error: NetworkError) -> Self {
        AppError::Network(error)
    }
}

impl From<url::ParseError> for AppError {
    fn from(error: url::ParseError) -> Self {
        AppError::Validation(format!("Invalid endpoint: {error}"))
    }
}

pub type AppResult<T> = Result<T, AppError>;
