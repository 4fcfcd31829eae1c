// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Link(LinkError),
}

/// Reasons an outbound link could not be handed to the system browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// The URL does not use an allowed scheme.
    UnsupportedScheme(String),

    /// The platform opener could not be spawned.
    LaunchFailed(String),

    /// The opener ran but reported a failure exit status.
    OpenerFailed(Option<i32>),
}

impl LinkError {
    /// Returns the i18n message key shown to the user for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LinkError::UnsupportedScheme(_) => "notification-link-unsupported",
            LinkError::LaunchFailed(_) | LinkError::OpenerFailed(_) => {
                "notification-link-open-error"
            }
        }
    }
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::UnsupportedScheme(url) => write!(f, "Unsupported link scheme: {}", url),
            LinkError::LaunchFailed(msg) => write!(f, "Could not launch opener: {}", msg),
            LinkError::OpenerFailed(Some(code)) => write!(f, "Opener exited with status {}", code),
            LinkError::OpenerFailed(None) => write!(f, "Opener terminated by signal"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Link(e) => write!(f, "Link Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<LinkError> for Error {
    fn from(err: LinkError) -> Self {
        Error::Link(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
