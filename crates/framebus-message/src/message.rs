use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// A structured cross-document message.
///
/// Wire field names are camelCase — the peers on the other side of the
/// channel are host pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Identifies the semantic event.
    pub event_code: String,
    /// Free-text descriptor of the publishing component/page, e.g.
    /// `"orders-app[o-1]-checkout[/cart]-pay-button[btn-7]"`.
    #[serde(default)]
    pub source: String,
    /// Arbitrary key-value payload.
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl Message {
    /// Create a message with an empty data payload.
    pub fn new(event_code: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            event_code: event_code.into(),
            source: source.into(),
            data: Map::new(),
        }
    }

    /// Attach a data payload.
    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = data;
        self
    }

    /// Serialize to the wire value posted over the channel.
    pub fn to_wire(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Decode a wire value into a typed message.
    pub fn from_wire(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// One key/value parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamPair {
    pub key: String,
    pub value: Value,
}

/// Declares a translation of one key/value pair to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamMapping {
    pub from: ParamPair,
    pub to: ParamPair,
}

/// Ordered sequence of parameter mappings.
pub type ParamMappingList = Vec<ParamMapping>;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn wire_field_names_are_camel_case() {
        let mut data = Map::new();
        data.insert("orderId".to_string(), json!(42));
        let message = Message::new("order.created", "orders-app").with_data(data);

        let wire = message.to_wire().unwrap();
        assert_eq!(wire["eventCode"], "order.created");
        assert_eq!(wire["source"], "orders-app");
        assert_eq!(wire["data"]["orderId"], 42);
    }

    #[test]
    fn from_wire_defaults_missing_fields() {
        let message = Message::from_wire(json!({"eventCode": "A"})).unwrap();
        assert_eq!(message.event_code, "A");
        assert!(message.source.is_empty());
        assert!(message.data.is_empty());
    }

    #[test]
    fn from_wire_rejects_missing_event_code() {
        assert!(Message::from_wire(json!({"source": "s"})).is_err());
        assert!(Message::from_wire(json!("not an object")).is_err());
    }

    #[test]
    fn param_mapping_roundtrips() {
        let mapping = ParamMapping {
            from: ParamPair {
                key: "orderId".to_string(),
                value: json!(42),
            },
            to: ParamPair {
                key: "selectedOrder".to_string(),
                value: json!(42),
            },
        };

        let wire = serde_json::to_value(&mapping).unwrap();
        assert_eq!(wire["from"]["key"], "orderId");
        assert_eq!(wire["to"]["key"], "selectedOrder");
        let back: ParamMapping = serde_json::from_value(wire).unwrap();
        assert_eq!(back, mapping);
    }
}
