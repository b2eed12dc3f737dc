use crate::scene::{NodeCursor, Result, SceneFile, SceneNode};
use crate::table::{BatchSource, Cell, ColumnType, RowBatch, Schema, bind_scene_path};

/// Validated binding for the relationship target projection.
#[derive(Debug, Clone)]
pub struct RelationshipsTable {
	path: String,
}

impl RelationshipsTable {
	/// Function name used in binding diagnostics.
	pub const NAME: &'static str = "scene_relationships";

	/// Validate arguments and bind to a scene path.
	pub fn bind(args: &[Cell]) -> Result<Self> {
		Ok(Self {
			path: bind_scene_path(Self::NAME, args)?,
		})
	}

	/// Output schema: one row per (relationship, target) pair.
	pub fn schema() -> Schema {
		Schema::new(&[
			("node_path", ColumnType::Utf8),
			("rel_name", ColumnType::Utf8),
			("target_path", ColumnType::Utf8),
			("target_index", ColumnType::Int32),
		])
	}

	/// Bound scene path.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Open the scene and start a query stream positioned at the first
	/// node's first relationship.
	pub fn open(&self) -> Result<RelationshipsQuery> {
		let file = SceneFile::open(&self.path)?;

		let mut query = RelationshipsQuery {
			schema: Self::schema(),
			cursor: file.cursor(),
			current: None,
			relationships: Vec::new(),
			relationship_index: 0,
			targets: Vec::new(),
			target_index: 0,
		};
		if query.cursor.has_next() {
			let first = query.cursor.next()?;
			query.load_node(first);
		}

		Ok(query)
	}
}

/// Streaming state for the relationship target projection.
///
/// Three cursor levels held as named fields: the outer node cursor, an
/// index into the current node's relationship list, and an index into
/// the current relationship's resolved target list.
pub struct RelationshipsQuery {
	schema: Schema,
	cursor: NodeCursor,
	current: Option<SceneNode>,
	/// Property indices of the current node's relationships.
	relationships: Vec<usize>,
	relationship_index: usize,
	/// Resolved absolute targets of the current relationship, loaded
	/// lazily when that relationship becomes current.
	targets: Vec<String>,
	target_index: usize,
}

impl BatchSource for RelationshipsQuery {
	fn schema(&self) -> &Schema {
		&self.schema
	}

	fn next_batch(&mut self, output: &mut RowBatch) -> Result<usize> {
		output.clear();

		while !output.is_full() {
			let Some(node) = self.current.clone() else {
				break;
			};

			if self.relationship_index < self.relationships.len() && self.target_index < self.targets.len() {
				let property = &node.properties()[self.relationships[self.relationship_index]];
				output.push_row(vec![
					Cell::Utf8(node.path().as_str().to_owned()),
					Cell::Utf8(property.name().to_owned()),
					Cell::Utf8(self.targets[self.target_index].clone()),
					Cell::Int32(self.target_index as i32),
				])?;
				self.target_index += 1;
			} else if self.relationship_index < self.relationships.len() {
				self.relationship_index += 1;
				self.target_index = 0;
				self.targets.clear();
				if self.relationship_index < self.relationships.len() {
					self.targets = resolve_targets(&node, self.relationships[self.relationship_index]);
				}
			} else if self.cursor.has_next() {
				let next = self.cursor.next()?;
				self.load_node(next);
			} else {
				self.current = None;
			}
		}

		Ok(output.len())
	}
}

impl RelationshipsQuery {
	fn load_node(&mut self, node: SceneNode) {
		self.relationships = node
			.properties()
			.iter()
			.enumerate()
			.filter_map(|(index, property)| property.as_relationship().map(|_| index))
			.collect();
		self.relationship_index = 0;
		self.target_index = 0;
		self.targets = match self.relationships.first() {
			Some(&first) => resolve_targets(&node, first),
			None => Vec::new(),
		};
		self.current = Some(node);
	}
}

/// Resolve one relationship's targets to absolute paths, anchored at the
/// owning node.
fn resolve_targets(node: &SceneNode, property_index: usize) -> Vec<String> {
	let Some(relationship) = node.properties()[property_index].as_relationship() else {
		return Vec::new();
	};

	relationship
		.targets
		.iter()
		.map(|target| node.path().resolve_target(target).as_str().to_owned())
		.collect()
}
