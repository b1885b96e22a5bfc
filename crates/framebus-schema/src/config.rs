/// Controls schema validation behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// When true, event codes without a schema return
    /// `SchemaError::NoSchema` instead of passing unchecked.
    pub fail_on_missing_schema: bool,
}
