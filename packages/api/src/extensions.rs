//! Query methods on JSON values

use jsonpath_query_core::{JsonNode, JsonValue, RequiredValueError};

use crate::JsonPath;

/// Evaluate compiled paths directly on a value
///
/// Implemented for every [`JsonValue`], including `serde_json::Value`.
pub trait JsonPathExt: JsonValue + Sized {
    fn select_all(&self, path: &JsonPath) -> Vec<&Self> {
        path.get_all(self)
    }

    /// First match, if any
    fn select_one(&self, path: &JsonPath) -> Option<&Self> {
        path.get_one(self)
    }

    /// The only match
    ///
    /// # Errors
    ///
    /// Fails unless exactly one value matched.
    fn select_required(&self, path: &JsonPath) -> Result<&Self, RequiredValueError> {
        path.require_one(self)
    }

    fn trace_one(&self, path: &JsonPath) -> Option<JsonNode<'_, Self>> {
        path.trace_one(self)
    }

    fn trace_all(&self, path: &JsonPath) -> Vec<JsonNode<'_, Self>> {
        path.trace_all(self)
    }
}

impl<V: JsonValue> JsonPathExt for V {}
