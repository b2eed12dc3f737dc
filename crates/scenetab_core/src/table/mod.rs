mod batch;
mod function;
mod nodes;
mod properties;
mod relationships;
mod xforms;

/// Batch, cell, and schema containers for the tabular sink.
pub use batch::{Cell, Column, ColumnType, ColumnValues, RowBatch, Schema};
/// Pull-based batch production contract and shared binding checks.
pub use function::{BatchSource, bind_scene_path};
/// Node listing projection.
pub use nodes::{NodesQuery, NodesTable, UNDEFINED_TYPE};
/// Property listing projection.
pub use properties::{PropertiesQuery, PropertiesTable};
/// Relationship target projection.
pub use relationships::{RelationshipsQuery, RelationshipsTable};
/// Resolved transform projection.
pub use xforms::{XformsQuery, XformsTable};
