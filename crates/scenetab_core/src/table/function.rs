use std::path::Path;

use crate::scene::{Result, SceneError, has_scene_extension};
use crate::table::{Cell, RowBatch, Schema};

/// A resumable producer of fixed-schema row batches.
///
/// One query engine call maps to one [`BatchSource::next_batch`] call:
/// the source fills the caller's batch up to its capacity or to source
/// exhaustion, then returns. Cursor state survives between calls inside
/// the source itself; there is no background progress.
pub trait BatchSource {
	/// Output schema declared at bind time.
	fn schema(&self) -> &Schema;

	/// Clear `output`, write between 0 and `output.capacity()` rows, and
	/// return the exact count written.
	///
	/// An exhausted source keeps returning zero rows and never errors.
	fn next_batch(&mut self, output: &mut RowBatch) -> Result<usize>;
}

/// Validate the shared single-argument binding contract.
///
/// Every projection takes exactly one string argument, the scene-file
/// path. Checks run in order (arity, type, empty path, missing file,
/// directory, extension) and all fail before any open attempt, naming
/// the offending path.
pub fn bind_scene_path(function: &'static str, args: &[Cell]) -> Result<String> {
	if args.len() != 1 {
		return Err(SceneError::BadArgumentCount { function, got: args.len() });
	}

	let path = match &args[0] {
		Cell::Utf8(path) => path.clone(),
		_ => return Err(SceneError::BadArgumentType { function }),
	};
	if path.trim().is_empty() {
		return Err(SceneError::EmptyPath { function });
	}

	let fs_path = Path::new(&path);
	if !fs_path.exists() {
		return Err(SceneError::FileNotFound { path });
	}
	if fs_path.is_dir() {
		return Err(SceneError::NotAFile { path });
	}
	if !has_scene_extension(fs_path) {
		return Err(SceneError::UnsupportedExtension { path });
	}

	Ok(path)
}

#[cfg(test)]
mod tests;
