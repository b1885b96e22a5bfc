use std::sync::Arc;

use framebus_message::{Message, ParamMapping};

use crate::error::Result;

/// Maps parameters of an accepted message onto a target UI model.
///
/// Extension point only: the listener defines when mapping runs (after a
/// message is accepted, before the accepted diagnostic) and what it
/// receives; no mapping algorithm ships with the helper. An error returned
/// here is confined by the listener's failure boundary — reported, never
/// propagated.
pub trait ParamMapper {
    fn apply(&self, message: &Message, mappings: &[ParamMapping]) -> Result<()>;
}

/// Shared handle to a parameter mapper.
pub type ParamMapperHandle = Arc<dyn ParamMapper + Send + Sync>;
