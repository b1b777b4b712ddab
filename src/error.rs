use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolarError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Configuration Error: {0}")]
    Configuration(String),

    #[error("Upstream Error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Transport Error: {0}")]
    Transport(String),

    #[error("Category '{0}' has no locations to analyze")]
    EmptyCategory(String),

    #[error("No solar data available for this location.")]
    NoData,
}

impl SolarError {
    /// The message shown next to a single failed location.
    /// Upstream and transport failures surface their cause without the variant prefix.
    pub fn detail(&self) -> String {
        match self {
            SolarError::Upstream { message, .. } => message.clone(),
            SolarError::Transport(cause) => cause.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for SolarError {
    fn from(e: reqwest::Error) -> Self {
        SolarError::Transport(e.to_string())
    }
}

pub type SolarResult<T> = Result<T, SolarError>;
