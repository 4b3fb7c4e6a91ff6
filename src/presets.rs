//! Named option presets
//!
//! This module loads the option sets embedded in `presets/presets.toml` and
//! hands out copies by name. The table is parsed once per process.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::warn;

use crate::error::{CurrencyError, Result};
use crate::types::FormatCurrencyOptions;

/// Holds every preset known to the crate
struct PresetRegistry {
    presets: HashMap<String, FormatCurrencyOptions>,
}

// Global singleton for the embedded presets
static PRESET_REGISTRY: OnceLock<PresetRegistry> = OnceLock::new();

impl PresetRegistry {
    fn new() -> Self {
        let mut registry = Self {
            presets: HashMap::new(),
        };

        if let Err(e) = registry.load_embedded_data() {
            // Continue with an empty registry
            warn!(error = %e, "failed to load embedded presets");
        }

        registry
    }

    fn global() -> &'static PresetRegistry {
        PRESET_REGISTRY.get_or_init(Self::new)
    }

    fn load_embedded_data(&mut self) -> Result<()> {
        let presets_toml = include_str!("presets/presets.toml");
        self.parse_presets(presets_toml)
    }

    /// Parse a TOML document with an optional `[base]` table and one table
    /// per preset
    fn parse_presets(&mut self, toml_str: &str) -> Result<()> {
        let parsed: toml::Value =
            toml::from_str(toml_str).map_err(|e| CurrencyError::Config(e.to_string()))?;

        let table = parsed
            .as_table()
            .ok_or_else(|| CurrencyError::Config("root is not a table".to_string()))?;

        let base = match table.get("base") {
            Some(value) => value
                .as_table()
                .cloned()
                .ok_or_else(|| CurrencyError::Config("base is not a table".to_string()))?,
            None => toml::Table::new(),
        };

        for (name, value) in table {
            if name == "base" {
                continue;
            }

            let overrides = value
                .as_table()
                .ok_or_else(|| CurrencyError::Config(format!("{name} is not a table")))?;

            let mut merged = base.clone();
            merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));

            let options = FormatCurrencyOptions::deserialize(toml::Value::Table(merged))
                .map_err(|e| CurrencyError::Config(format!("{name}: {e}")))?;
            options.validate()?;

            self.presets.insert(normalize_name(name), options);
        }

        Ok(())
    }
}

/// Case-insensitive, `_` and `-` interchangeable
fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('_', "-")
}

/// Look up a preset by name, e.g. `en-IN` or `id_id`
pub fn get_preset(name: &str) -> Option<FormatCurrencyOptions> {
    PresetRegistry::global()
        .presets
        .get(&normalize_name(name))
        .cloned()
}

/// Names of all available presets, sorted
pub fn list_presets() -> Vec<String> {
    let mut names: Vec<String> = PresetRegistry::global().presets.keys().cloned().collect();
    names.sort();
    names
}

impl FormatCurrencyOptions {
    /// Options of a named preset
    ///
    /// # Examples
    /// ```
    /// use currency_format::{format_currency, FormatCurrencyOptions};
    ///
    /// let options = FormatCurrencyOptions::preset("en-IN").unwrap();
    /// assert_eq!(format_currency(1234567.5, &options).unwrap(), "₹12,34,567.50");
    /// ```
    pub fn preset(name: &str) -> Result<Self> {
        get_preset(name).ok_or_else(|| CurrencyError::UnknownPreset(name.to_string()))
    }

    /// Read options from a TOML table; missing keys keep their defaults
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let options: FormatCurrencyOptions =
            toml::from_str(toml_str).map_err(|e| CurrencyError::Config(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }
}
