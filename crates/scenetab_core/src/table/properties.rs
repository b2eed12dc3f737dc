use crate::scene::{NodeCursor, Property, Result, SceneFile, SceneNode, display_string};
use crate::table::{BatchSource, Cell, ColumnType, RowBatch, Schema, bind_scene_path};

/// Type name reported for relationship-kind properties.
const RELATIONSHIP_TYPE: &str = "relationship";

/// Validated binding for the property listing projection.
#[derive(Debug, Clone)]
pub struct PropertiesTable {
	path: String,
}

impl PropertiesTable {
	/// Function name used in binding diagnostics.
	pub const NAME: &'static str = "scene_properties";

	/// Validate arguments and bind to a scene path.
	pub fn bind(args: &[Cell]) -> Result<Self> {
		Ok(Self {
			path: bind_scene_path(Self::NAME, args)?,
		})
	}

	/// Output schema: one row per property.
	pub fn schema() -> Schema {
		Schema::new(&[
			("node_path", ColumnType::Utf8),
			("prop_name", ColumnType::Utf8),
			("prop_kind", ColumnType::Utf8),
			("type_name", ColumnType::Utf8),
			("is_array", ColumnType::Bool),
			("is_time_sampled", ColumnType::Bool),
			("default_value", ColumnType::Utf8),
		])
	}

	/// Bound scene path.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Open the scene and start a query stream positioned at the first
	/// node.
	pub fn open(&self) -> Result<PropertiesQuery> {
		let file = SceneFile::open(&self.path)?;
		let mut cursor = file.cursor();
		let current = if cursor.has_next() { Some(cursor.next()?) } else { None };

		Ok(PropertiesQuery {
			schema: Self::schema(),
			cursor,
			current,
			property_index: 0,
		})
	}
}

/// Streaming state for the property listing projection.
///
/// Two cursor levels held as named fields: the outer node cursor plus an
/// index into the current node's property snapshot.
pub struct PropertiesQuery {
	schema: Schema,
	cursor: NodeCursor,
	current: Option<SceneNode>,
	property_index: usize,
}

impl PropertiesQuery {
	/// Skip to the next node that still has properties to emit.
	///
	/// Nodes with empty (or spent) property lists are consumed here, in
	/// the same fill call, so they never take up a row slot or end a
	/// batch early. Returns the node owning the property at
	/// `property_index`, or `None` once every level is exhausted.
	fn advance(&mut self) -> Result<Option<SceneNode>> {
		loop {
			match &self.current {
				None => return Ok(None),
				Some(node) if self.property_index < node.properties().len() => {
					return Ok(Some(node.clone()));
				}
				Some(_) => {
					if self.cursor.has_next() {
						self.current = Some(self.cursor.next()?);
						self.property_index = 0;
					} else {
						self.current = None;
					}
				}
			}
		}
	}
}

impl BatchSource for PropertiesQuery {
	fn schema(&self) -> &Schema {
		&self.schema
	}

	fn next_batch(&mut self, output: &mut RowBatch) -> Result<usize> {
		output.clear();

		while !output.is_full() {
			let Some(node) = self.advance()? else {
				break;
			};

			let row = match &node.properties()[self.property_index] {
				Property::Attribute(attribute) => vec![
					Cell::Utf8(node.path().as_str().to_owned()),
					Cell::Utf8(attribute.name.clone()),
					Cell::Utf8("attribute".to_owned()),
					Cell::Utf8(attribute.type_name.clone()),
					Cell::Bool(attribute.array),
					Cell::Bool(attribute.time_varying),
					Cell::Utf8(attribute.default.as_ref().map(display_string).unwrap_or_default()),
				],
				Property::Relationship(relationship) => vec![
					Cell::Utf8(node.path().as_str().to_owned()),
					Cell::Utf8(relationship.name.clone()),
					Cell::Utf8(RELATIONSHIP_TYPE.to_owned()),
					Cell::Utf8(RELATIONSHIP_TYPE.to_owned()),
					Cell::Bool(false),
					Cell::Bool(false),
					Cell::Utf8(String::new()),
				],
			};

			output.push_row(row)?;
			self.property_index += 1;
		}

		Ok(output.len())
	}
}
