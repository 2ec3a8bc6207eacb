use crate::types::TypeRef;
use std::fmt;
use thiserror::Error as ThisError;

///
/// ResolveError
///
/// Every failure names the entity (or raw input) it concerns. Nothing here is
/// retried; the caller that asked for the controller receives it as-is.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum ResolveError {
    #[error("blank {input} type for the controller of '{entity}'")]
    BlankType {
        entity: TypeRef,
        input: &'static str,
    },

    #[error("base path for the controller of '{entity}' is empty")]
    EmptyBasePath { entity: TypeRef },

    #[error("invalid type path '{path}'")]
    InvalidType { path: String },

    #[error("missing details information for '{entity}'")]
    MissingDetails { entity: TypeRef },

    #[error("identity of '{entity}' does not name an identifier field")]
    MissingIdentifier { entity: TypeRef },

    #[error("no identity registered for entity '{entity}'")]
    MissingIdentity { entity: TypeRef },

    #[error("no service registered for entity '{entity}' (detail field '{field}')")]
    MissingService { entity: TypeRef, field: String },

    #[error("unsupported endpoint kind '{value}'")]
    UnsupportedKind { value: String },
}

impl ResolveError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::UnsupportedKind { .. } => ErrorClass::Programming,
            Self::BlankType { .. }
            | Self::EmptyBasePath { .. }
            | Self::InvalidType { .. }
            | Self::MissingDetails { .. }
            | Self::MissingIdentifier { .. }
            | Self::MissingIdentity { .. }
            | Self::MissingService { .. } => ErrorClass::Configuration,
        }
    }

    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self.class(), ErrorClass::Configuration)
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}: {self}", self.class())
    }
}

///
/// ErrorClass
/// Configuration errors come from bad declarations; programming errors mean
/// the caller classified an endpoint it should never have produced.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Configuration,
    Programming,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Configuration => "configuration",
            Self::Programming => "programming",
        };
        write!(f, "{label}")
    }
}
