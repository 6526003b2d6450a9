//! serde_json <-> [`Node`] conversion utilities

use serde_json::{Map, Number, Value};

use crate::node::{Node, NodeValue, Tag};

impl Node {
    /// Builds a node tree from a JSON value, keeping object key order.
    pub fn from_json(value: Value) -> Node {
        match value {
            Value::Null => Node::null(),
            Value::Bool(b) => Node::bool(b),
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    Node::scalar(Tag::Int, n.to_string())
                } else {
                    Node::float(n.to_string())
                }
            }
            Value::String(s) => Node::string(s),
            Value::Array(items) => Node::sequence(items.into_iter().map(Node::from_json).collect()),
            Value::Object(entries) => Node::mapping(
                entries
                    .into_iter()
                    .map(|(k, v)| (Node::string(k), Node::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Converts back to JSON. Scalars whose text does not fit their tag
    /// (e.g. `!!float` `NaN`) become strings.
    pub fn to_json(&self) -> Value {
        if self.is_null() {
            return Value::Null;
        }
        match &self.value {
            NodeValue::Document(content) => content.to_json(),
            NodeValue::Scalar(text) => scalar_to_json(&self.tag, text),
            NodeValue::Sequence(items) => Value::Array(items.iter().map(Node::to_json).collect()),
            NodeValue::Mapping(entries) => {
                let mut map = Map::with_capacity(entries.len());
                for (k, v) in entries {
                    let key = match k.text() {
                        Some(text) => text.to_string(),
                        None => k.to_json().to_string(),
                    };
                    map.insert(key, v.to_json());
                }
                Value::Object(map)
            }
        }
    }
}

fn scalar_to_json(tag: &Tag, text: &str) -> Value {
    match tag {
        Tag::Bool => match text {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::String(text.to_string()),
        },
        Tag::Int => text
            .parse::<i64>()
            .map(|n| Value::Number(n.into()))
            .unwrap_or_else(|_| Value::String(text.to_string())),
        Tag::Float => text
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(text.to_string())),
        _ => Value::String(text.to_string()),
    }
}
