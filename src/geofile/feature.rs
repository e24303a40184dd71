use geojson::{JsonObject, JsonValue};

use crate::error::ReduceError;

/// Mutable access to the `features` array of a feature collection document.
pub fn features_mut(document: &mut JsonValue) -> Result<&mut Vec<JsonValue>, ReduceError> {
    match document.get_mut("features") {
        Some(JsonValue::Array(features)) => Ok(features),
        Some(other) => Err(ReduceError::Structure(format!(
            "`features` is not an array but {}",
            json_type_name(other)
        ))),
        None => Err(ReduceError::Structure(
            "document has no `features` member".to_string(),
        )),
    }
}

/// Mutable access to the `properties` object of the feature at `index`.
///
/// A `null` or absent `properties` member is a structure error, as is a feature that is not an
/// object at all.
pub fn properties_mut(
    feature: &mut JsonValue,
    index: usize,
) -> Result<&mut JsonObject, ReduceError> {
    let feature = match feature {
        JsonValue::Object(feature) => feature,
        other => {
            return Err(ReduceError::Structure(format!(
                "feature {} is not an object but {}",
                index,
                json_type_name(other)
            )))
        }
    };
    match feature.get_mut("properties") {
        Some(JsonValue::Object(properties)) => Ok(properties),
        Some(other) => Err(ReduceError::Structure(format!(
            "`properties` of feature {} is not an object but {}",
            index,
            json_type_name(other)
        ))),
        None => Err(ReduceError::Structure(format!(
            "feature {} has no `properties` member",
            index
        ))),
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
