//! Domain value objects: EntityType, ViewEngine.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── EntityType ───────────────────────────────────────────────────────────────

/// The kind of unit being scaffolded.
///
/// The lowercase string form doubles as the template family name:
/// `element` selects the `element` / `element-style` templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    #[default]
    Element,
    Behavior,
}

impl EntityType {
    pub const ALL: [EntityType; 2] = [Self::Element, Self::Behavior];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Behavior => "behavior",
        }
    }

    pub const fn is_behavior(self) -> bool {
        matches!(self, Self::Behavior)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "element" | "el" => Ok(Self::Element),
            "behavior" | "behaviour" => Ok(Self::Behavior),
            other => Err(DomainError::UnknownEntityType(other.to_string())),
        }
    }
}

// ── ViewEngine ───────────────────────────────────────────────────────────────

/// Templating (view) engine recorded for the host project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewEngine {
    Html,
    #[default]
    Ejs,
    Jade,
}

impl ViewEngine {
    pub const ALL: [ViewEngine; 3] = [Self::Html, Self::Ejs, Self::Jade];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Ejs => "ejs",
            Self::Jade => "jade",
        }
    }
}

impl fmt::Display for ViewEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewEngine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "ejs" => Ok(Self::Ejs),
            "jade" | "pug" => Ok(Self::Jade),
            other => Err(DomainError::UnknownViewEngine(other.to_string())),
        }
    }
}
