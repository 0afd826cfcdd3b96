use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Invalid score for {neighbourhood} / {column}: {value}")]
    InvalidScore {
        neighbourhood: String,
        column: String,
        value: String,
    },

    #[error("Invalid priority for {dimension}: expected an integer 1-5, got {value}")]
    InvalidPriority { dimension: String, value: String },

    #[error("Missing preference for dimension: {0}")]
    MissingPreference(String),

    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("Unknown neighbourhood: {0}")]
    UnknownNeighbourhood(String),

    #[error("Empty table: {0}")]
    EmptyTable(String),

    #[error("No samples for dimension: {0}")]
    NoSamples(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Csv(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
