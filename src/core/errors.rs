use thiserror::Error;

#[derive(Error, Debug)]
pub enum KarteiError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(Box<csv::Error>),

    #[error("Deck header is missing a required column: {0}")]
    MissingColumn(&'static str),

    #[error("Failed to load deck: {0}")]
    FailedToLoadDeck(String),

    #[error("KarteiError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for KarteiError {
    fn from(error: std::io::Error) -> Self {
        KarteiError::Io(Box::new(error))
    }
}

impl From<csv::Error> for KarteiError {
    fn from(error: csv::Error) -> Self {
        KarteiError::Csv(Box::new(error))
    }
}
