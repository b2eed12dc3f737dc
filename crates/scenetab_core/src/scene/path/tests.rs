use crate::scene::NodePath;

#[test]
fn top_and_child_build_absolute_paths() {
	let world = NodePath::top("World");
	assert_eq!(world.as_str(), "/World");

	let cube = world.child("Cube");
	assert_eq!(cube.as_str(), "/World/Cube");
	assert_eq!(cube.name(), "Cube");
	assert_eq!(world.name(), "World");
}

#[test]
fn parent_walks_up_and_stops_at_top() {
	let mesh = NodePath::top("World").child("Group").child("Mesh");

	let group = mesh.parent().expect("mesh has a parent");
	assert_eq!(group.as_str(), "/World/Group");

	let world = group.parent().expect("group has a parent");
	assert_eq!(world.as_str(), "/World");
	assert!(world.parent().is_none(), "top-level node has no parent");
}

#[test]
fn plain_relative_target_names_a_sibling() {
	let owner = NodePath::top("World").child("A");
	assert_eq!(owner.resolve_target("sibling").as_str(), "/World/sibling");
}

#[test]
fn nested_relative_target_resolves_under_the_parent() {
	let owner = NodePath::top("World").child("A");
	assert_eq!(owner.resolve_target("B/C").as_str(), "/World/B/C");
}

#[test]
fn dotdot_pops_and_saturates_at_the_top() {
	let owner = NodePath::top("World").child("Group").child("Mesh");
	assert_eq!(owner.resolve_target("../Other").as_str(), "/World/Other");
	assert_eq!(owner.resolve_target("../../../../Other").as_str(), "/Other");
}

#[test]
fn absolute_target_passes_through_normalized() {
	let owner = NodePath::top("World").child("A");
	assert_eq!(owner.resolve_target("/Materials/Steel").as_str(), "/Materials/Steel");
	assert_eq!(owner.resolve_target("/Materials//Steel/.").as_str(), "/Materials/Steel");
}

#[test]
fn dot_segments_are_dropped() {
	let owner = NodePath::top("World").child("A");
	assert_eq!(owner.resolve_target("./sibling").as_str(), "/World/sibling");
}
