use serde_json::json;

use crate::scene::SceneError;
use crate::table::{Cell, bind_scene_path};

#[test]
fn rejects_zero_arguments() {
	let err = bind_scene_path("scene_nodes", &[]).expect_err("no arguments is a binding error");
	assert!(matches!(err, SceneError::BadArgumentCount { function: "scene_nodes", got: 0 }));
}

#[test]
fn rejects_extra_arguments() {
	let args = vec![Cell::Utf8("a.scn".to_owned()), Cell::Utf8("b.scn".to_owned())];
	let err = bind_scene_path("scene_nodes", &args).expect_err("two arguments is a binding error");
	assert!(matches!(err, SceneError::BadArgumentCount { got: 2, .. }));
}

#[test]
fn rejects_non_string_argument() {
	let err = bind_scene_path("scene_xforms", &[Cell::Int32(7)]).expect_err("non-string path is a binding error");
	assert!(matches!(err, SceneError::BadArgumentType { function: "scene_xforms" }));
}

#[test]
fn rejects_empty_and_whitespace_paths() {
	for path in ["", "   ", "\t\n"] {
		let err = bind_scene_path("scene_properties", &[Cell::Utf8(path.to_owned())])
			.expect_err("blank path is a binding error");
		assert!(matches!(err, SceneError::EmptyPath { .. }));
	}
}

#[test]
fn rejects_missing_files_with_the_path_in_the_error() {
	let err = bind_scene_path("scene_nodes", &[Cell::Utf8("/no/such/scene.scn".to_owned())])
		.expect_err("missing file is a binding error");
	match err {
		SceneError::FileNotFound { path } => assert_eq!(path, "/no/such/scene.scn"),
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn rejects_directories() {
	let scene = scenetab_testkit::write_scene("probe.scn", &scenetab_testkit::scene_doc(json!([])));
	let dir = scene.path().parent().expect("fixture has a parent dir").display().to_string();

	let err = bind_scene_path("scene_nodes", &[Cell::Utf8(dir)]).expect_err("directory is a binding error");
	assert!(matches!(err, SceneError::NotAFile { .. }));
}

#[test]
fn rejects_unrecognized_extensions_before_any_open() {
	let text = scenetab_testkit::write_text("notes.txt", "{}");
	let err = bind_scene_path("scene_relationships", &[Cell::Utf8(text.path_str())])
		.expect_err("txt extension is a binding error");
	match err {
		SceneError::UnsupportedExtension { path } => assert!(path.ends_with("notes.txt")),
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn accepts_all_recognized_extensions() {
	let doc = scenetab_testkit::scene_doc(json!([]));
	for name in ["a.scn", "a.scene", "a.SCN"] {
		let scene = scenetab_testkit::write_scene(name, &doc);
		let bound = bind_scene_path("scene_nodes", &[Cell::Utf8(scene.path_str())]).expect("recognized extension binds");
		assert_eq!(bound, scene.path_str());
	}
}
