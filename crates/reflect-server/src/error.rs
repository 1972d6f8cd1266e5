use std::path::PathBuf;

/// The reflect server error type
#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    /// Cannot read the configuration file
    #[error("reading configuration file {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid
    #[error("parsing configuration file: {0}")]
    ParseConfig(#[from] toml::de::Error),
    /// Cannot start the HTTP server
    #[error("starting server: {0}")]
    Server(#[source] std::io::Error),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
