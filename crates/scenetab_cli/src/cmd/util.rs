use std::path::Path;

use scenetab::scene::Result;
use scenetab::table::{BatchSource, Cell, RowBatch, Schema};

/// Render one path argument as projection binding cells.
pub(crate) fn path_args(path: &Path) -> Vec<Cell> {
	vec![Cell::Utf8(path.to_string_lossy().into_owned())]
}

/// Drive `source` to exhaustion, printing one JSON object per row.
pub(crate) fn stream_json_rows(source: &mut dyn BatchSource, batch_size: usize) -> Result<()> {
	let schema = source.schema().clone();
	let mut batch = RowBatch::with_capacity(&schema, batch_size);

	loop {
		let rows = source.next_batch(&mut batch)?;
		if rows == 0 {
			break;
		}
		for row in 0..rows {
			println!("{}", row_to_json(&schema, &batch, row));
		}
	}

	Ok(())
}

/// Render one batch row as a JSON object keyed by column name.
pub(crate) fn row_to_json(schema: &Schema, batch: &RowBatch, row: usize) -> serde_json::Value {
	let mut object = serde_json::Map::new();
	for (index, column) in schema.columns().iter().enumerate() {
		let value = match batch.column(index).cell(row) {
			Some(Cell::Utf8(text)) => serde_json::Value::from(text),
			Some(Cell::Bool(flag)) => serde_json::Value::from(flag),
			Some(Cell::Int32(number)) => serde_json::Value::from(number),
			Some(Cell::Float64(number)) => serde_json::Value::from(number),
			None => serde_json::Value::Null,
		};
		object.insert(column.name.to_owned(), value);
	}
	serde_json::Value::Object(object)
}
