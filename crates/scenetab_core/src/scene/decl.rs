use serde::Deserialize;

use crate::scene::node::Property;

/// Top-level scene document as authored on disk.
#[derive(Debug, Deserialize)]
pub struct SceneDecl {
	/// Declared format version; only [`crate::scene::SCENE_FORMAT_VERSION`] is recognized.
	pub version: u32,
	/// Top-level nodes in declared order.
	#[serde(default)]
	pub nodes: Vec<NodeDecl>,
}

/// One node declaration in the scene tree.
#[derive(Debug, Deserialize)]
pub struct NodeDecl {
	/// Node name; becomes the leaf path segment.
	pub name: String,
	/// Declared type tag; empty means undeclared.
	#[serde(rename = "type", default)]
	pub type_name: String,
	/// Optional classification tag.
	#[serde(default)]
	pub kind: Option<String>,
	/// Active flag.
	#[serde(default = "default_active")]
	pub active: bool,
	/// Instanceable flag.
	#[serde(default)]
	pub instanceable: bool,
	/// Optional local transform; authoring one makes the node xformable.
	#[serde(default)]
	pub transform: Option<TransformDecl>,
	/// Attached properties in declared order.
	#[serde(default)]
	pub properties: Vec<Property>,
	/// Child nodes in declared order.
	#[serde(default)]
	pub children: Vec<NodeDecl>,
}

fn default_active() -> bool {
	true
}

/// Local transform declaration: an explicit matrix or TRS components.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransformDecl {
	/// Flattened 4x4 local matrix with translation at indices 12..15.
	/// Wins over the component fields when present.
	#[serde(default)]
	pub matrix: Option<[f64; 16]>,
	/// Translation vector.
	#[serde(default)]
	pub translate: Option<[f64; 3]>,
	/// Euler rotation in degrees, applied X then Y then Z.
	#[serde(default)]
	pub rotate_xyz: Option<[f64; 3]>,
	/// Per-axis scale factors.
	#[serde(default)]
	pub scale: Option<[f64; 3]>,
}
