use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment failed to merge or extract the provider chain.
    #[error("failed to load configuration: {0}")]
    Figment(#[from] Box<figment::Error>),

    /// The decision data-usage threshold must lie in `(0, 1]`.
    #[error("decision_data_usage_threshold must be in (0, 1], got {value}")]
    InvalidThreshold { value: f64 },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        Self::Figment(Box::new(error))
    }
}
