mod compression;
mod cursor;
mod decl;
mod error;
mod node;
mod path;
mod stage;
mod value;
mod xform;

/// Compression detection result.
pub use compression::Compression;
/// Resumable pre-order node cursor.
pub use cursor::NodeCursor;
/// On-disk scene document declarations.
pub use decl::{NodeDecl, SceneDecl, TransformDecl};
/// Error and result aliases.
pub use error::{Result, SceneError};
/// Node handle and property variants.
pub use node::{Attribute, Property, Relationship, SceneNode};
/// Absolute node path representation and target resolution.
pub use path::NodePath;
/// Scene file opening, validation, and the pre-order node arena.
pub use stage::{SCENE_EXTENSIONS, SCENE_FORMAT_VERSION, SceneFile, has_scene_extension, is_valid_scene_file};
/// Attribute default-value rendering.
pub use value::display_string;
/// Transform composition, decomposition, and per-query accumulation cache.
pub use xform::{Decomposed, XFORM_TOLERANCE, XformCache, factor, matrix_from_decl, raw_translation};
