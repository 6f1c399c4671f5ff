// src/tables/registry.rs
use std::str::FromStr;

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tokens::{Category, TokenDefinition};

/// A definition as written in configuration, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDefinition {
    pub literal: String,
    pub category: String,
    pub name: String,
}

impl RawDefinition {
    pub fn new(literal: &str, category: &str, name: &str) -> Self {
        Self {
            literal: literal.to_owned(),
            category: category.to_owned(),
            name: name.to_owned(),
        }
    }
}

/// Unvalidated registry input: literal-backed definitions plus the extra
/// names that only take part in identifier numbering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySpec {
    #[serde(default)]
    pub definitions: Vec<RawDefinition>,
    #[serde(default)]
    pub extra_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("token `{name}` has an empty literal")]
    EmptyLiteral { name: String },

    #[error("token `{name}` uses unknown category `{category}`")]
    UnknownCategory { category: String, name: String },

    #[error("token `{name}` has a control character {byte:#04x} that cannot be embedded")]
    UnembeddableLiteral { name: String, byte: u8 },

    #[error("`{name}` is not a valid symbolic name")]
    InvalidName { name: String },

    #[error("literal {literal:?} is defined by both `{first}` and `{second}`")]
    DuplicateLiteral {
        literal: String,
        first: String,
        second: String,
    },

    #[error("symbolic name `{name}` is defined more than once")]
    DuplicateName { name: String },

    #[error("symbolic name `{name}` collides with an identifier the generated source already uses")]
    ReservedName { name: String },

    #[error("registry defines no tokens")]
    Empty,
}

/// Validated, immutable registry. Construct with [`Registry::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    definitions: Vec<TokenDefinition>,
    extra_names: Vec<String>,
}

/// Control bytes other than tab and newline have no escape and would corrupt
/// the emitted string literal.
fn unembeddable_byte(literal: &str) -> Option<u8> {
    literal
        .bytes()
        .find(|&b| b.is_ascii_control() && b != b'\t' && b != b'\n')
}

fn is_identifier(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

impl Registry {
    pub fn validate(spec: &RegistrySpec) -> Result<Self, RegistryError> {
        let mut definitions = Vec::with_capacity(spec.definitions.len());
        let mut literal_owner: HashMap<&str, &str> = HashMap::new();
        let mut names: HashSet<&str> = HashSet::new();

        for raw in &spec.definitions {
            if raw.literal.is_empty() {
                return Err(RegistryError::EmptyLiteral {
                    name: raw.name.clone(),
                });
            }
            if let Some(byte) = unembeddable_byte(&raw.literal) {
                return Err(RegistryError::UnembeddableLiteral {
                    name: raw.name.clone(),
                    byte,
                });
            }
            let category =
                Category::from_str(&raw.category).map_err(|_| RegistryError::UnknownCategory {
                    category: raw.category.clone(),
                    name: raw.name.clone(),
                })?;
            if !is_identifier(&raw.name) {
                return Err(RegistryError::InvalidName {
                    name: raw.name.clone(),
                });
            }
            if let Some(first) = literal_owner.insert(&raw.literal, &raw.name) {
                return Err(RegistryError::DuplicateLiteral {
                    literal: raw.literal.clone(),
                    first: first.to_owned(),
                    second: raw.name.clone(),
                });
            }
            if !names.insert(&raw.name) {
                return Err(RegistryError::DuplicateName {
                    name: raw.name.clone(),
                });
            }
            definitions.push(TokenDefinition {
                literal: raw.literal.clone(),
                category,
                name: raw.name.clone(),
            });
        }

        for name in &spec.extra_names {
            if !is_identifier(name) {
                return Err(RegistryError::InvalidName { name: name.clone() });
            }
            if !names.insert(name) {
                return Err(RegistryError::DuplicateName { name: name.clone() });
            }
        }

        if definitions.is_empty() && spec.extra_names.is_empty() {
            return Err(RegistryError::Empty);
        }

        log::debug!(
            "[registry] validated {} definitions, {} extra names",
            definitions.len(),
            spec.extra_names.len()
        );

        Ok(Self {
            definitions,
            extra_names: spec.extra_names.clone(),
        })
    }

    /// Definitions in declaration order (not emission order).
    pub fn definitions(&self) -> &[TokenDefinition] {
        &self.definitions
    }

    pub fn extra_names(&self) -> &[String] {
        &self.extra_names
    }

    /// Every symbolic name in declaration order, definitions first.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.definitions
            .iter()
            .map(|d| d.name.as_str())
            .chain(self.extra_names.iter().map(String::as_str))
    }

    /// Rejects the first name that is also in `reserved` (keywords and the
    /// identifiers an emitter declares itself).
    pub fn check_reserved<S: AsRef<str>>(&self, reserved: &[S]) -> Result<(), RegistryError> {
        let reserved: HashSet<&str> = reserved.iter().map(AsRef::as_ref).collect();
        match self.names().find(|n| reserved.contains(n)) {
            Some(name) => Err(RegistryError::ReservedName {
                name: name.to_owned(),
            }),
            None => Ok(()),
        }
    }

    /// Number of identifiers the registry needs: one per definition plus one
    /// per extra name.
    pub fn id_count(&self) -> usize {
        self.definitions.len() + self.extra_names.len()
    }
}
