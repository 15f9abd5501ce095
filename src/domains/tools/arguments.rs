//! Argument resolution.
//!
//! Turns the loosely typed argument map of an invocation into a
//! [`ResolvedArguments`] value that holds exactly one entry per declared
//! parameter, and from there into each tool's typed params struct.

use std::collections::BTreeMap;

use super::error::ToolError;
use super::registry::ToolDefinition;

/// Argument values for one invocation, checked against a tool's contract.
///
/// Every declared parameter has an entry. Optional parameters that the caller
/// left out resolve to the empty string. Undeclared arguments are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedArguments {
    values: BTreeMap<String, String>,
}

impl ResolvedArguments {
    /// Resolve `arguments` against `definition`.
    ///
    /// Parameters are checked in declaration order and the first required
    /// one that is absent or blank after trimming is reported.
    pub fn resolve(
        definition: &ToolDefinition,
        arguments: &BTreeMap<String, String>,
    ) -> Result<Self, ToolError> {
        let mut values = BTreeMap::new();

        for spec in &definition.parameters {
            let value = arguments.get(&spec.name).map(String::as_str).unwrap_or("");

            if spec.required && value.trim().is_empty() {
                return Err(ToolError::missing_argument(&definition.name, &spec.name));
            }

            values.insert(spec.name.clone(), value.to_string());
        }

        Ok(Self { values })
    }

    /// Value of a declared parameter, or `""` for anything undeclared.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Owned copy of [`get`](Self::get).
    pub fn string(&self, name: &str) -> String {
        self.get(name).to_string()
    }

    /// Number of resolved parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no parameters were resolved.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Conversion from resolved arguments into a tool's typed params struct.
///
/// Resolution has already enforced the parameter contract, so the
/// conversion itself cannot fail.
pub trait FromArguments: Sized {
    fn from_arguments(args: &ResolvedArguments) -> Self;
}

/// Split a comma-separated list, trimming entries and skipping blank ones.
///
/// Order and duplicates are preserved.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
