//! Content entity domain models

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// Content-type category of an entity.
///
/// Serialized as its plain name (`"node"`, `"media"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EntityKind {
    Node,
    TaxonomyTerm,
    User,
    /// Entity type without a canonical link template
    Other(String),
}

impl EntityKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Node => "node",
            Self::TaxonomyTerm => "taxonomy_term",
            Self::User => "user",
            Self::Other(name) => name,
        }
    }

    /// Canonical path prefix, `None` if the kind has no canonical route
    pub fn canonical_prefix(&self) -> Option<&'static str> {
        match self {
            Self::Node => Some("/node/"),
            Self::TaxonomyTerm => Some("/taxonomy/term/"),
            Self::User => Some("/user/"),
            Self::Other(_) => None,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "node" => Ok(Self::Node),
            "taxonomy_term" => Ok(Self::TaxonomyTerm),
            "user" => Ok(Self::User),
            "" => Err(AppError::BadRequest(
                "Entity kind must not be empty".to_string(),
            )),
            other => Ok(Self::Other(other.to_string())),
        }
    }
}

impl TryFrom<String> for EntityKind {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<EntityKind> for String {
    fn from(kind: EntityKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Capabilities the URL resolver needs from a content item.
pub trait Entity: Send + Sync {
    /// Content-type category
    fn kind(&self) -> EntityKind;

    /// Identifier, `None` for unsaved entities
    fn id(&self) -> Option<String>;

    /// Whether the entity type has a canonical public route
    fn has_canonical_route(&self) -> bool;

    /// Unaliased canonical path, e.g. `/node/1`
    fn system_path(&self) -> Result<String>;

    /// Relative canonical path as rendered for visitors (alias if present)
    fn canonical_path(&self) -> Result<String>;
}

/// Snapshot of an entity handed to domain providers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: Option<String>,
}

impl EntityRef {
    pub fn of(entity: &dyn Entity) -> Self {
        Self {
            kind: entity.kind(),
            id: entity.id(),
        }
    }
}

/// A content entity as handed over by the host system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntity {
    pub kind: EntityKind,
    #[serde(default)]
    pub id: Option<String>,
    /// Path alias, e.g. `/about-us`
    #[serde(default)]
    pub alias: Option<String>,
}

impl ContentEntity {
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: Some(id.into()),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl Entity for ContentEntity {
    fn kind(&self) -> EntityKind {
        self.kind.clone()
    }

    fn id(&self) -> Option<String> {
        self.id.clone()
    }

    fn has_canonical_route(&self) -> bool {
        self.kind.canonical_prefix().is_some()
    }

    fn system_path(&self) -> Result<String> {
        let prefix = self.kind.canonical_prefix().ok_or_else(|| {
            AppError::MalformedEntity(format!(
                "Entity type '{}' has no canonical route",
                self.kind
            ))
        })?;

        match self.id.as_deref() {
            Some(id) if !id.is_empty() => Ok(format!("{}{}", prefix, id)),
            _ => Err(AppError::MalformedEntity(format!(
                "The '{}' entity cannot have a URI as it does not have an ID",
                self.kind
            ))),
        }
    }

    fn canonical_path(&self) -> Result<String> {
        let system_path = self.system_path()?;
        match self.alias.as_deref() {
            Some(alias) if !alias.is_empty() => Ok(alias.to_string()),
            _ => Ok(system_path),
        }
    }
}
