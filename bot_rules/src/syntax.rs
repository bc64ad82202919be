//! Textual fact syntax.
//!
//! Facts cross the boundary with collaborators as `name:arg1 arg2 ...` and
//! pattern templates as `$x $y cane`. The characters involved are
//! configurable and can be loaded from TOML:
//!
//! ```toml
//! name_delimiter = ":"
//! arg_separator = " "
//! variable_sigil = "$"
//! repeated_variables = "independent"
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How template slots that share a variable name are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RepeatedVariables {
    /// Every variable slot captures on its own; names are not compared.
    #[default]
    Independent,
    /// Slots sharing a name must capture equal values.
    Unify,
}

/// Errors raised while loading a syntax configuration.
#[derive(Debug, Error)]
pub enum SyntaxError {
    #[error("invalid syntax configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("name delimiter and argument separator are both {0:?}")]
    Ambiguous(char),
}

/// Characters that shape the fact mini-language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Syntax {
    /// Separates the relation name from its arguments.
    pub name_delimiter: char,

    /// Separates arguments from each other.
    pub arg_separator: char,

    /// Prefix marking a template token as a variable slot.
    pub variable_sigil: char,

    pub repeated_variables: RepeatedVariables,
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            name_delimiter: ':',
            arg_separator: ' ',
            variable_sigil: '$',
            repeated_variables: RepeatedVariables::Independent,
        }
    }
}

impl Syntax {
    /// Parse a syntax configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, SyntaxError> {
        let syntax: Syntax = toml::from_str(input)?;
        if syntax.name_delimiter == syntax.arg_separator {
            return Err(SyntaxError::Ambiguous(syntax.name_delimiter));
        }
        Ok(syntax)
    }

    /// Split an argument string into tokens.
    ///
    /// Splits on every separator, so `""` is one empty token and doubled
    /// separators produce empty tokens.
    pub fn split_args(&self, args: &str) -> Vec<String> {
        args.split(self.arg_separator).map(str::to_owned).collect()
    }

    /// Split `name:args` at the first delimiter.
    pub fn split_fact<'a>(&self, text: &'a str) -> Option<(&'a str, &'a str)> {
        text.split_once(self.name_delimiter)
    }

    /// Check whether a template token is a variable slot.
    pub fn is_variable(&self, token: &str) -> bool {
        token.starts_with(self.variable_sigil)
    }
}
