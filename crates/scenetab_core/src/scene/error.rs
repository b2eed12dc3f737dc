use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, SceneError>;

/// Errors produced while binding, opening, and streaming scene data.
#[derive(Debug, Error)]
pub enum SceneError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Projection argument list had the wrong arity.
	#[error("{function} requires exactly one argument: file_path (got {got})")]
	BadArgumentCount {
		/// Projection function name.
		function: &'static str,
		/// Number of arguments supplied.
		got: usize,
	},
	/// Projection argument was not a string.
	#[error("{function} file_path must be a string")]
	BadArgumentType {
		/// Projection function name.
		function: &'static str,
	},
	/// Projection path argument was empty or whitespace-only.
	#[error("{function}: file_path cannot be empty")]
	EmptyPath {
		/// Projection function name.
		function: &'static str,
	},
	/// Bound path does not exist on disk.
	#[error("scene file not found: {path}")]
	FileNotFound {
		/// Offending path.
		path: String,
	},
	/// Bound path names a directory.
	#[error("path is a directory, not a file: {path}")]
	NotAFile {
		/// Offending path.
		path: String,
	},
	/// Bound path extension is outside the recognized whitelist.
	#[error("file must have a scene extension (.scn, .scnz, .scene, .scenez): {path}")]
	UnsupportedExtension {
		/// Offending path.
		path: String,
	},
	/// Document bytes were not valid scene JSON.
	#[error("scene parse: {0}")]
	Json(#[from] serde_json::Error),
	/// Document at a known path was rejected by the parser.
	#[error("failed to parse scene file {path}: {source}")]
	ParseFailed {
		/// Offending path.
		path: String,
		/// Underlying parse failure.
		#[source]
		source: serde_json::Error,
	},
	/// Decompression output exceeded the configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Declared format version is not understood.
	#[error("unsupported scene format version {version} (expected 1)")]
	UnsupportedFormatVersion {
		/// Declared version.
		version: u32,
	},
	/// Node name was empty or contained a path separator.
	#[error("invalid node name {name:?} under {parent}")]
	InvalidNodeName {
		/// Offending name.
		name: String,
		/// Parent path, or `/` for top-level nodes.
		parent: String,
	},
	/// Two nodes flattened to the same absolute path.
	#[error("duplicate node path: {path}")]
	DuplicateNodePath {
		/// Colliding path.
		path: String,
	},
	/// Node tree nesting exceeded the configured ceiling.
	#[error("scene tree depth exceeded (max={max_depth})")]
	TreeTooDeep {
		/// Configured depth ceiling.
		max_depth: usize,
	},
	/// `next` was called on an exhausted node cursor.
	#[error("node cursor exhausted: no more nodes available")]
	CursorExhausted,
	/// Row cell count did not match the batch schema width.
	#[error("row has {got} cells, schema declares {expected} columns")]
	ColumnCountMismatch {
		/// Declared column count.
		expected: usize,
		/// Supplied cell count.
		got: usize,
	},
	/// Row cell type did not match its column.
	#[error("column {column} expects {expected}, got {got}")]
	ColumnTypeMismatch {
		/// Column name.
		column: &'static str,
		/// Declared column type.
		expected: &'static str,
		/// Supplied cell type.
		got: &'static str,
	},
	/// Row was pushed into a batch already at capacity.
	#[error("row batch is full (capacity {capacity})")]
	BatchFull {
		/// Batch row capacity.
		capacity: usize,
	},
}
