use crate::scene::{NodeCursor, Result, SceneFile};
use crate::table::{BatchSource, Cell, ColumnType, RowBatch, Schema, bind_scene_path};

/// Sentinel type tag reported for nodes without a declared type.
pub const UNDEFINED_TYPE: &str = "<undefined>";

/// Validated binding for the node listing projection.
#[derive(Debug, Clone)]
pub struct NodesTable {
	path: String,
}

impl NodesTable {
	/// Function name used in binding diagnostics.
	pub const NAME: &'static str = "scene_nodes";

	/// Validate arguments and bind to a scene path.
	pub fn bind(args: &[Cell]) -> Result<Self> {
		Ok(Self {
			path: bind_scene_path(Self::NAME, args)?,
		})
	}

	/// Output schema: intrinsic node columns.
	pub fn schema() -> Schema {
		Schema::new(&[
			("node_path", ColumnType::Utf8),
			("parent_path", ColumnType::Utf8),
			("name", ColumnType::Utf8),
			("node_type", ColumnType::Utf8),
			("kind", ColumnType::Utf8),
			("active", ColumnType::Bool),
			("instanceable", ColumnType::Bool),
		])
	}

	/// Bound scene path.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Open the scene and start a query stream.
	pub fn open(&self) -> Result<NodesQuery> {
		let file = SceneFile::open(&self.path)?;
		Ok(NodesQuery {
			schema: Self::schema(),
			cursor: file.cursor(),
		})
	}
}

/// Streaming state for the node listing projection.
pub struct NodesQuery {
	schema: Schema,
	cursor: NodeCursor,
}

impl BatchSource for NodesQuery {
	fn schema(&self) -> &Schema {
		&self.schema
	}

	fn next_batch(&mut self, output: &mut RowBatch) -> Result<usize> {
		output.clear();

		while !output.is_full() && self.cursor.has_next() {
			let node = self.cursor.next()?;

			let node_type = match node.type_name() {
				"" => UNDEFINED_TYPE.to_owned(),
				declared => declared.to_owned(),
			};
			let parent_path = node
				.parent()
				.map(|parent| parent.path().as_str().to_owned())
				.unwrap_or_default();

			output.push_row(vec![
				Cell::Utf8(node.path().as_str().to_owned()),
				Cell::Utf8(parent_path),
				Cell::Utf8(node.name().to_owned()),
				Cell::Utf8(node_type),
				Cell::Utf8(node.kind().unwrap_or_default().to_owned()),
				Cell::Bool(node.is_active()),
				Cell::Bool(node.is_instanceable()),
			])?;
		}

		Ok(output.len())
	}
}
