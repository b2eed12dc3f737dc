/// File-level information command.
pub mod info;
/// Node listing command.
pub mod nodes;
/// Property listing command.
pub mod props;
/// Relationship target command.
pub mod rels;
/// Resolved transform command.
pub mod xforms;

pub(crate) mod util;

/// Default row capacity for one produced batch.
pub const DEFAULT_BATCH_SIZE: usize = 2048;
