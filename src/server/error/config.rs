use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// `APP_URL` is set but is not an absolute URL.
    #[error("Invalid APP_URL '{value}': {source}")]
    InvalidAppUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}
