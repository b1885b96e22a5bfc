use std::collections::HashMap;
use std::sync::Arc;

use jsonschema::Validator;
use serde_json::Value;

use crate::config::RegistryConfig;
use crate::error::{Result, SchemaError};
use crate::validator::validate_data;

/// Shared handle to a schema registry.
pub type SchemaRegistryHandle = Arc<SchemaRegistry>;

/// Event-code-keyed registry of compiled JSON Schema validators.
///
/// Schemas describe the `data` payload of a message, not the message
/// envelope itself — the envelope contract is enforced by the format
/// validator. Registration is programmatic; there is no filesystem in the
/// environment this helper models.
pub struct SchemaRegistry {
    validators: HashMap<String, Validator>,
    config: RegistryConfig,
}

impl SchemaRegistry {
    /// Create an empty registry with default config.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with explicit config.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            validators: HashMap::new(),
            config,
        }
    }

    /// Register a schema for an event code from a JSON string.
    pub fn register(&mut self, event_code: &str, schema_json: &str) -> Result<()> {
        let schema: Value = serde_json::from_str(schema_json)?;
        self.register_value(event_code, &schema)
    }

    /// Register a schema for an event code from a JSON value.
    pub fn register_value(&mut self, event_code: &str, schema: &Value) -> Result<()> {
        let compiled =
            jsonschema::validator_for(schema).map_err(|err| SchemaError::CompileFailed {
                event_code: event_code.to_string(),
                message: err.to_string(),
            })?;

        self.validators.insert(event_code.to_string(), compiled);
        Ok(())
    }

    /// Load from embedded `(event_code, schema_json)` pairs.
    pub fn from_embedded(schemas: &[(&str, &str)]) -> Result<Self> {
        let mut registry = Self::new();
        for (event_code, schema) in schemas {
            registry.register(event_code, schema)?;
        }
        Ok(registry)
    }

    /// Validate a data payload against the schema for its event code.
    pub fn validate(&self, event_code: &str, data: &Value) -> Result<()> {
        match self.validators.get(event_code) {
            Some(validator) => validate_data(event_code, data, validator),
            None if self.config.fail_on_missing_schema => {
                Err(SchemaError::NoSchema(event_code.to_string()))
            }
            None => Ok(()),
        }
    }

    /// Check if an event code has a registered schema.
    pub fn has_schema(&self, event_code: &str) -> bool {
        self.validators.contains_key(event_code)
    }

    /// Event codes with registered schemas, sorted.
    pub fn event_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.validators.keys().cloned().collect();
        codes.sort_unstable();
        codes
    }

    /// Registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
