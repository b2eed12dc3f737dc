use crate::scene::{NodeCursor, Result, SceneFile, XformCache, factor, raw_translation};
use crate::table::{BatchSource, Cell, ColumnType, RowBatch, Schema, bind_scene_path};

/// Validated binding for the resolved transform projection.
#[derive(Debug, Clone)]
pub struct XformsTable {
	path: String,
}

impl XformsTable {
	/// Function name used in binding diagnostics.
	pub const NAME: &'static str = "scene_xforms";

	/// Validate arguments and bind to a scene path.
	pub fn bind(args: &[Cell]) -> Result<Self> {
		Ok(Self {
			path: bind_scene_path(Self::NAME, args)?,
		})
	}

	/// Output schema: translation components plus classification flags.
	pub fn schema() -> Schema {
		Schema::new(&[
			("node_path", ColumnType::Utf8),
			("x", ColumnType::Float64),
			("y", ColumnType::Float64),
			("z", ColumnType::Float64),
			("has_rotation", ColumnType::Bool),
			("has_scale", ColumnType::Bool),
		])
	}

	/// Bound scene path.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Open the scene and start a query stream.
	pub fn open(&self) -> Result<XformsQuery> {
		let file = SceneFile::open(&self.path)?;
		Ok(XformsQuery {
			schema: Self::schema(),
			cursor: file.cursor(),
			cache: XformCache::new(),
			finished: false,
		})
	}
}

/// Streaming state for the resolved transform projection.
///
/// Single node cursor plus a per-query accumulation cache; non-xformable
/// nodes are skipped without consuming a row slot.
pub struct XformsQuery {
	schema: Schema,
	cursor: NodeCursor,
	cache: XformCache,
	finished: bool,
}

impl BatchSource for XformsQuery {
	fn schema(&self) -> &Schema {
		&self.schema
	}

	fn next_batch(&mut self, output: &mut RowBatch) -> Result<usize> {
		output.clear();

		if self.finished {
			return Ok(0);
		}

		while !output.is_full() && self.cursor.has_next() {
			let node = self.cursor.next()?;
			if !node.is_xformable() {
				continue;
			}

			let accumulated = self.cache.local_to_root(&node);
			let (translation, has_rotation, has_scale) = match factor(&accumulated) {
				Some(parts) => (parts.translation, parts.has_rotation(), parts.has_scale()),
				// Degenerate matrices cannot be classified; report the
				// raw translation with both flags down.
				None => (raw_translation(&accumulated), false, false),
			};

			output.push_row(vec![
				Cell::Utf8(node.path().as_str().to_owned()),
				Cell::Float64(translation.x),
				Cell::Float64(translation.y),
				Cell::Float64(translation.z),
				Cell::Bool(has_rotation),
				Cell::Bool(has_scale),
			])?;
		}

		if !self.cursor.has_next() {
			self.finished = true;
		}

		Ok(output.len())
	}
}
