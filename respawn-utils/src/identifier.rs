//! Namespaced resource identifiers (`namespace:path`).

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when a string is not a valid identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// The namespace contains a character outside `[a-z0-9_.-]`.
    #[error("Invalid character in namespace of identifier: {0}")]
    InvalidNamespace(String),
    /// The path contains a character outside `[a-z0-9_.-/]`.
    #[error("Invalid character in path of identifier: {0}")]
    InvalidPath(String),
    /// The namespace or path is empty.
    #[error("Identifier must not have an empty part: {0:?}")]
    Empty(String),
}

/// A namespaced key such as `minecraft:overworld`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    /// The namespace, `minecraft` for vanilla content.
    pub namespace: Cow<'static, str>,
    /// The path inside the namespace.
    pub path: Cow<'static, str>,
}

impl Identifier {
    /// Namespace used when none is given.
    pub const VANILLA_NAMESPACE: &'static str = "minecraft";

    /// A `minecraft:` identifier built from a static path.
    #[must_use]
    pub const fn vanilla_static(path: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(Self::VANILLA_NAMESPACE),
            path: Cow::Borrowed(path),
        }
    }

    /// Creates an identifier after validating both parts.
    pub fn new(
        namespace: impl Into<Cow<'static, str>>,
        path: impl Into<Cow<'static, str>>,
    ) -> Result<Self, IdentifierError> {
        let namespace = namespace.into();
        let path = path.into();
        if namespace.is_empty() || path.is_empty() {
            return Err(IdentifierError::Empty(format!("{namespace}:{path}")));
        }
        if !namespace.chars().all(is_namespace_char) {
            return Err(IdentifierError::InvalidNamespace(namespace.into_owned()));
        }
        if !path.chars().all(|c| is_namespace_char(c) || c == '/') {
            return Err(IdentifierError::InvalidPath(path.into_owned()));
        }
        Ok(Self { namespace, path })
    }
}

const fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace.to_owned(), path.to_owned()),
            None => Self::new(Self::VANILLA_NAMESPACE, s.to_owned()),
        }
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
