//! Per-part step options.
//!
//! Options are an opaque TOML table: the host passes whatever the part
//! declaration contains and each step reads the keys it understands.

/// Opaque options table for a build step.
#[derive(Debug, Clone, Default)]
pub struct StepOptions {
    /// Opaque options table (step-specific keys)
    pub options: toml::Table,
}

impl StepOptions {
    /// Create empty step options.
    pub fn new() -> Self {
        StepOptions {
            options: toml::Table::new(),
        }
    }

    /// Create step options from a TOML table.
    pub fn from_table(table: toml::Table) -> Self {
        StepOptions { options: table }
    }

    /// Get a string option.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(|v| v.as_str())
    }

    /// Get an array option.
    pub fn get_array(&self, key: &str) -> Option<&toml::value::Array> {
        self.options.get(key).and_then(|v| v.as_array())
    }

    /// Get an array of strings, ignoring non-string elements.
    pub fn get_string_array(&self, key: &str) -> Vec<String> {
        self.get_array(key)
            .map(|a| {
                a.iter()
                    .filter_map(|v| v.as_str().map(|s| s.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Set a string option.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.options
            .insert(key.into(), toml::Value::String(value.into()));
    }

    /// Check if the options are empty.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
