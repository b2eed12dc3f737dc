//! Public library API for projecting hierarchical scene files into flat row batches.

/// Scene-file parsing, node model, hierarchy traversal, and transform math.
pub mod scene;
/// Batch containers and the four tabular projections.
pub mod table;
