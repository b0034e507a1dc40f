use thiserror::Error;

/// Failure reported by a cluster client while fetching logs or inventory.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterClientError {
    #[error("Cluster connection failed: {0}")]
    Connection(String),

    #[error("Cluster access denied: {0}")]
    Unauthorized(String),

    #[error("Cluster resource not found: {0}")]
    NotFound(String),

    #[error("Cluster API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid cluster data: {0}")]
    InvalidData(String),
}

impl ClusterClientError {
    /// The underlying description, without the category prefix used by `Display`.
    pub fn description(&self) -> &str {
        match self {
            Self::Connection(description)
            | Self::Unauthorized(description)
            | Self::NotFound(description)
            | Self::Api(description)
            | Self::Io(description)
            | Self::InvalidData(description) => description,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{description}")]
pub struct AggregationFailure {
    pub description: String,
}

impl AggregationFailure {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl From<ClusterClientError> for AggregationFailure {
    fn from(error: ClusterClientError) -> Self {
        Self::new(error.description())
    }
}
