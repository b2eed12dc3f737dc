use crate::scene::SceneError;
use crate::table::{Cell, ColumnType, RowBatch, Schema};

fn schema() -> Schema {
	Schema::new(&[("name", ColumnType::Utf8), ("count", ColumnType::Int32)])
}

#[test]
fn push_and_read_back_one_row() {
	let schema = schema();
	let mut batch = RowBatch::with_capacity(&schema, 4);

	batch
		.push_row(vec![Cell::Utf8("cube".to_owned()), Cell::Int32(3)])
		.expect("row pushes");

	assert_eq!(batch.len(), 1);
	assert_eq!(batch.column(0).cell(0), Some(Cell::Utf8("cube".to_owned())));
	assert_eq!(batch.column(1).cell(0), Some(Cell::Int32(3)));
	assert_eq!(batch.column(0).cell(1), None);
}

#[test]
fn clear_keeps_schema_and_capacity() {
	let schema = schema();
	let mut batch = RowBatch::with_capacity(&schema, 2);
	batch
		.push_row(vec![Cell::Utf8("cube".to_owned()), Cell::Int32(3)])
		.expect("row pushes");

	batch.clear();

	assert!(batch.is_empty());
	assert_eq!(batch.capacity(), 2);
	assert_eq!(batch.schema().width(), 2);
	assert!(batch.column(0).is_empty());
}

#[test]
fn capacity_is_enforced() {
	let schema = schema();
	let mut batch = RowBatch::with_capacity(&schema, 1);
	batch
		.push_row(vec![Cell::Utf8("a".to_owned()), Cell::Int32(0)])
		.expect("first row fits");
	assert!(batch.is_full());

	let err = batch
		.push_row(vec![Cell::Utf8("b".to_owned()), Cell::Int32(1)])
		.expect_err("second row overflows");
	assert!(matches!(err, SceneError::BatchFull { capacity: 1 }));
}

#[test]
fn wrong_arity_is_rejected_without_writing() {
	let schema = schema();
	let mut batch = RowBatch::with_capacity(&schema, 4);

	let err = batch.push_row(vec![Cell::Utf8("a".to_owned())]).expect_err("short row fails");
	assert!(matches!(err, SceneError::ColumnCountMismatch { expected: 2, got: 1 }));
	assert!(batch.is_empty());
}

#[test]
fn wrong_cell_type_names_the_column() {
	let schema = schema();
	let mut batch = RowBatch::with_capacity(&schema, 4);

	let err = batch
		.push_row(vec![Cell::Utf8("a".to_owned()), Cell::Bool(true)])
		.expect_err("bool in int32 column fails");
	match err {
		SceneError::ColumnTypeMismatch { column, expected, got } => {
			assert_eq!(column, "count");
			assert_eq!(expected, "int32");
			assert_eq!(got, "bool");
		}
		other => panic!("unexpected error: {other}"),
	}
	assert!(batch.is_empty(), "failed push must not leave a partial row");
}

#[test]
fn zero_capacity_batch_is_immediately_full() {
	let schema = schema();
	let batch = RowBatch::with_capacity(&schema, 0);
	assert!(batch.is_full());
}
