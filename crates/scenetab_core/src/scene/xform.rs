use std::collections::HashMap;

use glam::{DMat3, DMat4, DQuat, DVec3, EulerRot};

use crate::scene::SceneNode;
use crate::scene::decl::TransformDecl;

/// Absolute tolerance used when classifying decomposed transforms.
pub const XFORM_TOLERANCE: f64 = 1e-6;

const DEGENERATE_DETERMINANT: f64 = 1e-12;

/// Build the local matrix for a transform declaration.
///
/// An explicit matrix wins; otherwise the components compose as
/// translation x rotation x scale, with missing components defaulting to
/// identity.
pub fn matrix_from_decl(decl: &TransformDecl) -> DMat4 {
	if let Some(cells) = &decl.matrix {
		return DMat4::from_cols_array(cells);
	}

	let translate = DVec3::from_array(decl.translate.unwrap_or([0.0; 3]));
	let angles = decl.rotate_xyz.unwrap_or([0.0; 3]);
	let rotation = DQuat::from_euler(
		EulerRot::XYZ,
		angles[0].to_radians(),
		angles[1].to_radians(),
		angles[2].to_radians(),
	);
	let scale = DVec3::from_array(decl.scale.unwrap_or([1.0; 3]));

	DMat4::from_scale_rotation_translation(scale, rotation, translate)
}

/// Translation, rotation, and scale factors of a decomposed transform.
#[derive(Debug, Clone, Copy)]
pub struct Decomposed {
	/// Translation component.
	pub translation: DVec3,
	/// Rotation component.
	pub rotation: DQuat,
	/// Per-axis scale factors.
	pub scale: DVec3,
}

impl Decomposed {
	/// True when the rotation's 3x3 matrix differs from identity in any
	/// entry by more than [`XFORM_TOLERANCE`].
	pub fn has_rotation(&self) -> bool {
		let rotation = DMat3::from_quat(self.rotation).to_cols_array();
		let identity = DMat3::IDENTITY.to_cols_array();
		rotation
			.iter()
			.zip(identity.iter())
			.any(|(got, expected)| (got - expected).abs() > XFORM_TOLERANCE)
	}

	/// True when any scale factor differs from one by more than
	/// [`XFORM_TOLERANCE`].
	pub fn has_scale(&self) -> bool {
		(self.scale.x - 1.0).abs() > XFORM_TOLERANCE
			|| (self.scale.y - 1.0).abs() > XFORM_TOLERANCE
			|| (self.scale.z - 1.0).abs() > XFORM_TOLERANCE
	}
}

/// Factor a transform into translation, rotation, and scale.
///
/// Returns `None` for degenerate (non-invertible) matrices, which cannot
/// be classified.
pub fn factor(matrix: &DMat4) -> Option<Decomposed> {
	if matrix.determinant().abs() < DEGENERATE_DETERMINANT {
		return None;
	}

	let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
	Some(Decomposed {
		translation,
		rotation,
		scale,
	})
}

/// Translation column of a matrix, read without decomposition.
pub fn raw_translation(matrix: &DMat4) -> DVec3 {
	matrix.w_axis.truncate()
}

/// Per-query cache of accumulated node-to-root transforms.
///
/// Keyed by arena index. Results are identical to recomputing the
/// ancestor product from scratch for every node.
pub struct XformCache {
	world: HashMap<usize, DMat4>,
}

impl XformCache {
	/// Empty cache.
	pub fn new() -> Self {
		Self { world: HashMap::new() }
	}

	/// Accumulated node-to-root transform for `node`, at the default
	/// (non-animated) sample.
	pub fn local_to_root(&mut self, node: &SceneNode) -> DMat4 {
		if let Some(cached) = self.world.get(&node.index()) {
			return *cached;
		}

		let parent_to_root = match node.parent() {
			Some(parent) => self.local_to_root(&parent),
			None => DMat4::IDENTITY,
		};
		let accumulated = parent_to_root * node.local_transform();
		self.world.insert(node.index(), accumulated);
		accumulated
	}
}

impl Default for XformCache {
	fn default() -> Self {
		Self::new()
	}
}
