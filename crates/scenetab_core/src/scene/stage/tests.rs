use serde_json::json;

use crate::scene::{SceneError, SceneFile, is_valid_scene_file};

fn parse_doc(doc: serde_json::Value) -> SceneFile {
	SceneFile::parse(serde_json::to_vec(&doc).expect("doc serializes")).expect("doc parses")
}

#[test]
fn flattens_tree_in_pre_order() {
	let file = parse_doc(json!({
		"version": 1,
		"nodes": [
			{"name": "World", "children": [
				{"name": "Cube"},
				{"name": "Group", "children": [{"name": "Mesh"}]}
			]},
			{"name": "Materials"}
		]
	}));

	let paths: Vec<&str> = (0..file.node_count()).map(|index| file.record(index).path.as_str()).collect();
	assert_eq!(paths, ["/World", "/World/Cube", "/World/Group", "/World/Group/Mesh", "/Materials"]);
}

#[test]
fn parent_links_follow_the_tree() {
	let file = parse_doc(json!({
		"version": 1,
		"nodes": [{"name": "World", "children": [{"name": "Cube"}]}]
	}));

	assert_eq!(file.record(0).parent, None);
	assert_eq!(file.record(1).parent, Some(0));
}

#[test]
fn node_fields_default_as_specified() {
	let file = parse_doc(json!({
		"version": 1,
		"nodes": [{"name": "Bare"}]
	}));

	let record = file.record(0);
	assert_eq!(record.type_name, "");
	assert_eq!(record.kind, None);
	assert!(record.active);
	assert!(!record.instanceable);
	assert!(record.local_xform.is_none());
	assert!(record.properties.is_empty());
}

#[test]
fn property_count_sums_across_nodes() {
	let file = parse_doc(json!({
		"version": 1,
		"nodes": [
			{"name": "A", "properties": [
				{"kind": "attribute", "name": "size", "type": "double", "default": 2.0},
				{"kind": "relationship", "name": "material:binding", "targets": ["/Materials/Steel"]}
			]},
			{"name": "B"},
			{"name": "C", "properties": [
				{"kind": "attribute", "name": "radius", "type": "double"}
			]}
		]
	}));

	assert_eq!(file.node_count(), 3);
	assert_eq!(file.property_count(), 3);
}

#[test]
fn rejects_unknown_format_version() {
	let bytes = serde_json::to_vec(&json!({"version": 99, "nodes": []})).expect("doc serializes");
	let err = SceneFile::parse(bytes).expect_err("version 99 is rejected");
	assert!(matches!(err, SceneError::UnsupportedFormatVersion { version: 99 }));
}

#[test]
fn rejects_duplicate_sibling_names() {
	let bytes = serde_json::to_vec(&json!({
		"version": 1,
		"nodes": [{"name": "World", "children": [{"name": "Cube"}, {"name": "Cube"}]}]
	}))
	.expect("doc serializes");

	let err = SceneFile::parse(bytes).expect_err("duplicate sibling paths are rejected");
	match err {
		SceneError::DuplicateNodePath { path } => assert_eq!(path, "/World/Cube"),
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn rejects_names_with_separators() {
	let bytes = serde_json::to_vec(&json!({
		"version": 1,
		"nodes": [{"name": "World/Cube"}]
	}))
	.expect("doc serializes");

	let err = SceneFile::parse(bytes).expect_err("separator in name is rejected");
	assert!(matches!(err, SceneError::InvalidNodeName { .. }));
}

#[test]
fn rejects_non_json_payload() {
	let err = SceneFile::parse(b"not a scene".to_vec()).expect_err("garbage is rejected");
	assert!(matches!(err, SceneError::Json(_)));
}

#[test]
fn validity_probe_accepts_recognized_extensions_only() {
	let scene = scenetab_testkit::write_scene("probe.scn", &scenetab_testkit::scene_doc(json!([])));
	assert!(is_valid_scene_file(&scene.path_str()));

	let text = scenetab_testkit::write_text("probe.txt", "{}");
	assert!(!is_valid_scene_file(&text.path_str()));

	assert!(!is_valid_scene_file(""));
	assert!(!is_valid_scene_file("   "));
	assert!(!is_valid_scene_file("/no/such/file.scn"));
}

#[test]
fn validity_probe_rejects_directories() {
	let scene = scenetab_testkit::write_scene("probe.scn", &scenetab_testkit::scene_doc(json!([])));
	let dir = scene.path().parent().expect("fixture has a parent dir");
	assert!(!is_valid_scene_file(&dir.display().to_string()));
}

#[test]
fn open_reads_compressed_scenes() {
	let doc = scenetab_testkit::scene_doc(json!([{"name": "World"}]));
	let scene = scenetab_testkit::write_scene_zstd("packed.scnz", &doc);

	let file = SceneFile::open(scene.path()).expect("compressed scene opens");
	assert_eq!(file.compression, crate::scene::Compression::Zstd);
	assert_eq!(file.node_count(), 1);
}

#[test]
fn open_reports_the_offending_path_on_parse_failure() {
	let bad = scenetab_testkit::write_text("broken.scn", "{not json");
	let err = SceneFile::open(bad.path()).expect_err("broken document is rejected");
	match err {
		SceneError::ParseFailed { path, .. } => assert!(path.ends_with("broken.scn")),
		other => panic!("unexpected error: {other}"),
	}
}
