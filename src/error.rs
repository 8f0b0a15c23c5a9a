// SPDX-License-Identifier: MPL-2.0
use thiserror::Error as ThisError;

#[derive(Debug, Clone, ThisError)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Content Error: {0}")]
    Content(ContentError),
}

/// Reasons a content file could not be turned into showcase items.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ContentError {
    /// The file is not valid TOML or does not match the content schema.
    #[error("malformed content file: {0}")]
    Malformed(String),

    /// The embedded default content is missing from the binary.
    #[error("embedded content `{0}` not found")]
    MissingEmbedded(&'static str),

    /// Two rooms share the same id, so their gallery state cannot be matched.
    #[error("duplicate room id `{0}`")]
    DuplicateRoom(String),
}

impl From<ContentError> for Error {
    fn from(err: ContentError) -> Self {
        Error::Content(err)
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

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn content_error_wraps_reason() {
        let err: Error = ContentError::DuplicateRoom("suite".into()).into();
        assert_eq!(format!("{}", err), "Content Error: duplicate room id `suite`");
    }

    #[test]
    fn toml_parse_error_maps_to_config() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
