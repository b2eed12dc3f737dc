use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use glam::DMat4;

use crate::scene::compression::decode_bytes;
use crate::scene::decl::{NodeDecl, SceneDecl};
use crate::scene::node::Property;
use crate::scene::xform;
use crate::scene::{Compression, NodeCursor, NodePath, Result, SceneError, SceneNode};

/// Recognized scene-file extensions (lowercase, without the dot).
pub const SCENE_EXTENSIONS: [&str; 4] = ["scn", "scnz", "scene", "scenez"];

/// Scene format version understood by this crate.
pub const SCENE_FORMAT_VERSION: u32 = 1;

const MAX_TREE_DEPTH: usize = 256;

/// Cheap pre-open validity probe for a scene-file path.
///
/// False for empty or whitespace-only paths, missing files, directories,
/// and unrecognized extensions. A true result does not guarantee the
/// document parses; [`SceneFile::open`] reports those failures.
pub fn is_valid_scene_file(path: &str) -> bool {
	if path.trim().is_empty() {
		return false;
	}

	let fs_path = Path::new(path);
	fs_path.is_file() && has_scene_extension(fs_path)
}

/// True when the path's final extension is in the recognized whitelist.
pub fn has_scene_extension(path: &Path) -> bool {
	path.extension()
		.and_then(|ext| ext.to_str())
		.is_some_and(|ext| SCENE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

/// Parsed, immutable scene document flattened into a pre-order arena.
///
/// Node order is fixed at parse time: parents before children, siblings
/// in declared order. Every traversal of the same file observes the same
/// order.
#[derive(Debug)]
pub struct SceneFile {
	/// Declared format version.
	pub version: u32,
	/// Compression detected on the raw stream.
	pub compression: Compression,
	records: Vec<NodeRecord>,
}

#[derive(Debug)]
pub(crate) struct NodeRecord {
	pub(crate) path: NodePath,
	pub(crate) parent: Option<usize>,
	pub(crate) type_name: String,
	pub(crate) kind: Option<String>,
	pub(crate) active: bool,
	pub(crate) instanceable: bool,
	pub(crate) properties: Vec<Property>,
	pub(crate) local_xform: Option<DMat4>,
}

impl SceneFile {
	/// Open a scene file from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Arc<Self>> {
		let path = path.as_ref();
		let raw = fs::read(path)?;
		match Self::parse(raw) {
			Ok(file) => Ok(Arc::new(file)),
			Err(SceneError::Json(source)) => Err(SceneError::ParseFailed {
				path: path.display().to_string(),
				source,
			}),
			Err(other) => Err(other),
		}
	}

	/// Parse raw (possibly zstd-compressed) scene document bytes.
	pub fn parse(raw: Vec<u8>) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw)?;
		let decl: SceneDecl = serde_json::from_slice(&bytes)?;
		if decl.version != SCENE_FORMAT_VERSION {
			return Err(SceneError::UnsupportedFormatVersion { version: decl.version });
		}

		let mut records = Vec::new();
		let mut seen = HashSet::new();
		for node in decl.nodes {
			flatten(node, None, 0, &mut records, &mut seen)?;
		}

		Ok(Self {
			version: decl.version,
			compression,
			records,
		})
	}

	/// Number of nodes in pre-order.
	pub fn node_count(&self) -> usize {
		self.records.len()
	}

	/// Total number of properties across all nodes.
	pub fn property_count(&self) -> usize {
		self.records.iter().map(|record| record.properties.len()).sum()
	}

	/// Handle to the node at `index` in pre-order.
	pub fn node(self: &Arc<Self>, index: usize) -> SceneNode {
		SceneNode::new(Arc::clone(self), index)
	}

	/// Fresh pre-order traversal cursor over all nodes.
	pub fn cursor(self: &Arc<Self>) -> NodeCursor {
		NodeCursor::new(Arc::clone(self))
	}

	pub(crate) fn record(&self, index: usize) -> &NodeRecord {
		&self.records[index]
	}
}

fn flatten(
	decl: NodeDecl,
	parent: Option<usize>,
	depth: usize,
	records: &mut Vec<NodeRecord>,
	seen: &mut HashSet<String>,
) -> Result<()> {
	if depth >= MAX_TREE_DEPTH {
		return Err(SceneError::TreeTooDeep { max_depth: MAX_TREE_DEPTH });
	}

	if decl.name.is_empty() || decl.name.contains('/') {
		let parent_path = parent.map_or_else(|| "/".to_owned(), |index| records[index].path.as_str().to_owned());
		return Err(SceneError::InvalidNodeName {
			name: decl.name,
			parent: parent_path,
		});
	}

	let path = match parent {
		Some(index) => records[index].path.child(&decl.name),
		None => NodePath::top(&decl.name),
	};
	if !seen.insert(path.as_str().to_owned()) {
		return Err(SceneError::DuplicateNodePath { path: path.as_str().to_owned() });
	}

	let children = decl.children;
	let index = records.len();
	records.push(NodeRecord {
		path,
		parent,
		type_name: decl.type_name,
		kind: decl.kind,
		active: decl.active,
		instanceable: decl.instanceable,
		properties: decl.properties,
		local_xform: decl.transform.as_ref().map(xform::matrix_from_decl),
	});

	for child in children {
		flatten(child, Some(index), depth + 1, records, seen)?;
	}

	Ok(())
}

#[cfg(test)]
mod tests;
