use serde_json::json;

use crate::scene::display_string;

#[test]
fn null_renders_empty() {
	assert_eq!(display_string(&json!(null)), "");
}

#[test]
fn strings_render_without_quotes() {
	assert_eq!(display_string(&json!("steel")), "steel");
}

#[test]
fn numbers_render_as_written() {
	assert_eq!(display_string(&json!(2.5)), "2.5");
	assert_eq!(display_string(&json!(42)), "42");
}

#[test]
fn arrays_and_objects_render_as_compact_json() {
	assert_eq!(display_string(&json!([1, 2, 3])), "[1,2,3]");
	assert_eq!(display_string(&json!({"r": 1.0})), "{\"r\":1.0}");
}

#[test]
fn booleans_render_as_json_literals() {
	assert_eq!(display_string(&json!(true)), "true");
}
