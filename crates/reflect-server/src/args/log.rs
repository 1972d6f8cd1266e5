use std::fmt;

use clap::ValueEnum;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub(crate) enum LogLevel {
    /// Completely disables logging
    Off,
    /// Only errors from the server and the query engine
    Error,
    /// Warnings and errors from the server and the query engine
    Warn,
    /// Info, warning and error messages from the server and the query engine
    #[default]
    Info,
    /// Debug, info, warning and error messages from the server and the query engine
    Debug,
    /// Trace, debug, info, warning and error messages from all dependencies
    Trace,
}

impl LogLevel {
    pub(crate) fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "reflect_server=error,graphql_reflect=error,off",
            LogLevel::Warn => "reflect_server=warn,graphql_reflect=warn,off",
            LogLevel::Info => "reflect_server=info,graphql_reflect=info,off",
            LogLevel::Debug => "reflect_server=debug,graphql_reflect=debug,off",
            LogLevel::Trace => "trace",
        }
    }
}

impl AsRef<str> for LogLevel {
    fn as_ref(&self) -> &str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}
