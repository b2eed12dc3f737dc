use serde_json::Value;

/// Render an attribute default value as a stable display string.
///
/// Strings render bare (no quotes), null renders empty, and everything
/// else renders as compact JSON.
pub fn display_string(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}

#[cfg(test)]
mod tests;
