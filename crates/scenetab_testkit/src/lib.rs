//! Shared test helpers for workspace crates.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// One scene file written into a private temp directory.
///
/// The directory lives as long as the fixture value; dropping it removes
/// the file.
pub struct SceneFixture {
	_dir: TempDir,
	path: PathBuf,
}

impl SceneFixture {
	/// Absolute path to the written file.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Path as a UTF-8 string, for binding arguments.
	pub fn path_str(&self) -> String {
		self.path.to_str().expect("temp path is utf-8").to_owned()
	}
}

/// Wrap a node array into a versioned scene document.
pub fn scene_doc(nodes: Value) -> Value {
	json!({ "version": 1, "nodes": nodes })
}

/// Write a scene document under `name` in a fresh temp directory.
pub fn write_scene(name: &str, doc: &Value) -> SceneFixture {
	write_bytes(name, &serde_json::to_vec_pretty(doc).expect("doc serializes"))
}

/// Write a zstd-compressed scene document under `name`.
pub fn write_scene_zstd(name: &str, doc: &Value) -> SceneFixture {
	let bytes = serde_json::to_vec(doc).expect("doc serializes");
	let compressed = zstd::encode_all(bytes.as_slice(), 0).expect("zstd encodes");
	write_bytes(name, &compressed)
}

/// Write arbitrary text under `name` in a fresh temp directory.
pub fn write_text(name: &str, contents: &str) -> SceneFixture {
	write_bytes(name, contents.as_bytes())
}

fn write_bytes(name: &str, bytes: &[u8]) -> SceneFixture {
	let dir = TempDir::new().expect("temp dir creates");
	let path = dir.path().join(name);
	fs::write(&path, bytes).expect("fixture writes");
	SceneFixture { _dir: dir, path }
}

/// Canonical small scene shared across crates: a world of shapes with
/// attributes, relationships, and transforms.
pub fn simple_scene() -> Value {
	scene_doc(json!([
		{
			"name": "World",
			"type": "Xform",
			"kind": "group",
			"transform": {},
			"children": [
				{
					"name": "Cube",
					"type": "Cube",
					"transform": { "translate": [5.0, 0.0, 0.0] },
					"properties": [
						{ "kind": "attribute", "name": "size", "type": "double",
						  "default": 2.0 }
					]
				},
				{
					"name": "Sphere",
					"type": "Sphere",
					"transform": { "scale": [2.0, 2.0, 2.0] },
					"properties": [
						{ "kind": "attribute", "name": "radius", "type": "double",
						  "default": 1.5 },
						{ "kind": "relationship", "name": "material:binding",
						  "targets": ["/Materials/Steel"] }
					]
				},
				{
					"name": "Group",
					"type": "Xform",
					"transform": {},
					"children": [
						{ "name": "Mesh", "type": "Mesh", "transform": {} }
					]
				}
			]
		},
		{
			"name": "Materials",
			"children": [
				{ "name": "Steel", "type": "Material" }
			]
		}
	]))
}
