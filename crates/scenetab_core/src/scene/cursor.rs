use std::sync::Arc;

use crate::scene::{Result, SceneError, SceneFile, SceneNode};

/// Resumable pre-order cursor over the nodes of an open scene file.
///
/// Position is a plain index into the file's immutable pre-order arena,
/// so reset and resume are cheap position reassignments. Iteration does
/// not re-validate the source.
pub struct NodeCursor {
	file: Arc<SceneFile>,
	position: usize,
}

impl NodeCursor {
	/// Create a cursor positioned before the first node.
	pub fn new(file: Arc<SceneFile>) -> Self {
		Self { file, position: 0 }
	}

	/// True while nodes remain.
	pub fn has_next(&self) -> bool {
		self.position < self.file.node_count()
	}

	/// Advance and return the next node.
	///
	/// Calling past the end is an internal contract violation and fails
	/// with [`SceneError::CursorExhausted`].
	pub fn next(&mut self) -> Result<SceneNode> {
		if !self.has_next() {
			return Err(SceneError::CursorExhausted);
		}

		let node = self.file.node(self.position);
		self.position += 1;
		Ok(node)
	}

	/// Rewind to the first node without reopening the source.
	pub fn reset(&mut self) {
		self.position = 0;
	}
}
