//! Error conversion implementations.
//!
//! Conversions from third-party and lower-layer errors into the unified
//! [`Error`] type.

use super::types::Error;

impl From<serde_saphyr::Error> for Error {
    fn from(err: serde_saphyr::Error) -> Self {
        Error::Yaml(err.to_string())
    }
}

impl From<crate::ooxml::opc::error::OpcError> for Error {
    fn from(err: crate::ooxml::opc::error::OpcError) -> Self {
        Error::Ooxml(err.into())
    }
}

impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::Io(err.error)
    }
}
