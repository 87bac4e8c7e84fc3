use derive_more::Display;

/// Failures surfaced by a stock gateway. An empty result is not an error.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum GatewayError {
    /// The request never reached the server or no response came back
    #[display(fmt = "Network Error: {}", _0)]
    Network(String),
    /// The server answered with a non-2xx status
    #[display(fmt = "Server Error: {} {}", status, status_text)]
    Server { status: u16, status_text: String },
    /// The body could not be decoded into the expected shape
    #[display(fmt = "Decode Error: {}", _0)]
    Decode(String),
    #[display(fmt = "Invalid ticker: {:?}", _0)]
    InvalidTicker(String),
    #[display(fmt = "Invalid query: {}", _0)]
    InvalidQuery(String),
}

impl std::error::Error for GatewayError {}

impl GatewayError {
    /// Short heading for the error banner.
    pub fn title(&self) -> &'static str {
        match self {
            GatewayError::Network(_) => "Connection problem",
            GatewayError::Server { .. } => "Server error",
            GatewayError::Decode(_) => "Unexpected response",
            GatewayError::InvalidTicker(_) | GatewayError::InvalidQuery(_) => "Invalid request",
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
