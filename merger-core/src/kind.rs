//! Declaration kinds of merged Java types.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of type declaration emitted for the merged file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    /// `public class <Name> {`
    #[default]
    Class,
    /// `public interface <Name> {`
    Interface,
}

/// Returned when a declaration kind string is neither `class` nor `interface`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown declaration kind '{0}', expected 'class' or 'interface'")]
pub struct UnknownDeclarationKind(pub String);

impl DeclarationKind {
    /// All supported kinds, in declaration order.
    pub const ALL: [DeclarationKind; 2] = [DeclarationKind::Class, DeclarationKind::Interface];

    /// Returns the configuration code of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Interface => "interface",
        }
    }

    /// Java keyword used in the declaration line.
    pub fn keyword(&self) -> &'static str {
        self.as_str()
    }

    /// The opening declaration line for a type called `name`.
    pub fn declaration(&self, name: &str) -> String {
        format!("public {} {} {{", self.keyword(), name)
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeclarationKind {
    type Err = UnknownDeclarationKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownDeclarationKind(s.to_string()))
    }
}
