use std::sync::Arc;

use glam::DMat4;
use serde::Deserialize;
use serde_json::Value;

use crate::scene::{NodePath, SceneFile};

/// One named property attached to a node.
///
/// Discriminated explicitly by the authored `kind` tag; each variant
/// carries only the fields relevant to that case.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Property {
	/// Typed value slot.
	Attribute(Attribute),
	/// Ordered references to other node paths.
	Relationship(Relationship),
}

impl Property {
	/// Property name, unique within its node.
	pub fn name(&self) -> &str {
		match self {
			Self::Attribute(attribute) => &attribute.name,
			Self::Relationship(relationship) => &relationship.name,
		}
	}

	/// Stable lowercase label for the property variant.
	pub fn kind_label(&self) -> &'static str {
		match self {
			Self::Attribute(_) => "attribute",
			Self::Relationship(_) => "relationship",
		}
	}

	/// Borrow the relationship payload, if this is one.
	pub fn as_relationship(&self) -> Option<&Relationship> {
		match self {
			Self::Relationship(relationship) => Some(relationship),
			Self::Attribute(_) => None,
		}
	}
}

/// Attribute payload: a declared, typed value slot.
#[derive(Debug, Clone, Deserialize)]
pub struct Attribute {
	/// Property name.
	pub name: String,
	/// Declared value type name.
	#[serde(rename = "type", default)]
	pub type_name: String,
	/// True when the declared type is an array type.
	#[serde(default)]
	pub array: bool,
	/// True when the value may vary over time samples.
	#[serde(default)]
	pub time_varying: bool,
	/// Authored default value, if any.
	#[serde(default)]
	pub default: Option<Value>,
}

/// Relationship payload: ordered target paths.
#[derive(Debug, Clone, Deserialize)]
pub struct Relationship {
	/// Property name.
	pub name: String,
	/// Target paths as authored; absolute or node-relative.
	#[serde(default)]
	pub targets: Vec<String>,
}

/// Cheap owned handle to one node of an open scene file.
///
/// Holds the shared file plus an arena index; cloning never copies node
/// data. All accessors are read-only views over the immutable arena.
#[derive(Debug, Clone)]
pub struct SceneNode {
	file: Arc<SceneFile>,
	index: usize,
}

impl SceneNode {
	pub(crate) fn new(file: Arc<SceneFile>, index: usize) -> Self {
		Self { file, index }
	}

	/// Absolute node path.
	pub fn path(&self) -> &NodePath {
		&self.file.record(self.index).path
	}

	/// Parent handle; `None` for top-level nodes.
	pub fn parent(&self) -> Option<SceneNode> {
		let parent = self.file.record(self.index).parent?;
		Some(Self::new(Arc::clone(&self.file), parent))
	}

	/// Leaf name.
	pub fn name(&self) -> &str {
		self.path().name()
	}

	/// Raw declared type tag; may be empty.
	pub fn type_name(&self) -> &str {
		&self.file.record(self.index).type_name
	}

	/// Classification tag, if set.
	pub fn kind(&self) -> Option<&str> {
		self.file.record(self.index).kind.as_deref()
	}

	/// Active flag.
	pub fn is_active(&self) -> bool {
		self.file.record(self.index).active
	}

	/// Instanceable flag.
	pub fn is_instanceable(&self) -> bool {
		self.file.record(self.index).instanceable
	}

	/// True when the node authors a local transform.
	pub fn is_xformable(&self) -> bool {
		self.file.record(self.index).local_xform.is_some()
	}

	/// Authored local transform; identity when absent.
	pub fn local_transform(&self) -> DMat4 {
		self.file.record(self.index).local_xform.unwrap_or(DMat4::IDENTITY)
	}

	/// Properties in declared order.
	pub fn properties(&self) -> &[Property] {
		&self.file.record(self.index).properties
	}

	/// Arena index, stable for the lifetime of the open file.
	pub fn index(&self) -> usize {
		self.index
	}
}
