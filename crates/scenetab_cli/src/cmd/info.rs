use std::path::PathBuf;

use scenetab::scene::{Result, SceneFile, is_valid_scene_file};

pub fn run(path: PathBuf) -> Result<()> {
	let display = path.to_string_lossy().into_owned();
	let file = SceneFile::open(&path)?;

	let payload = serde_json::json!({
		"path": display,
		"valid": is_valid_scene_file(&display),
		"version": file.version,
		"compression": file.compression.as_str(),
		"nodes": file.node_count(),
		"properties": file.property_count(),
	});
	println!("{}", serde_json::to_string_pretty(&payload)?);

	Ok(())
}
