use std::fmt;

/// Absolute, `/`-delimited node path unique within one open scene file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath(String);

impl NodePath {
	/// Build a top-level path from a root node name.
	pub fn top(name: &str) -> Self {
		Self(format!("/{name}"))
	}

	/// Append one child segment.
	pub fn child(&self, name: &str) -> Self {
		Self(format!("{}/{name}", self.0))
	}

	/// Path string, always starting with `/`.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Leaf path segment.
	pub fn name(&self) -> &str {
		self.0.rsplit('/').next().unwrap_or("")
	}

	/// Parent path, `None` for top-level nodes.
	pub fn parent(&self) -> Option<NodePath> {
		let cut = self.0.rfind('/')?;
		if cut == 0 { None } else { Some(Self(self.0[..cut].to_owned())) }
	}

	/// True when `target` is written as an absolute path.
	pub fn is_absolute(target: &str) -> bool {
		target.starts_with('/')
	}

	/// Resolve a relationship target against this owning-node path.
	///
	/// Absolute targets pass through (normalized segment by segment).
	/// Relative targets anchor at the owning node's parent, so a plain
	/// segment names a sibling of the owner. `..` pops one level and
	/// saturates at the hierarchy top; `.` and empty segments are dropped.
	pub fn resolve_target(&self, target: &str) -> NodePath {
		let mut segments: Vec<&str> = Vec::new();
		if !Self::is_absolute(target) {
			segments.extend(self.0.split('/').filter(|segment| !segment.is_empty()));
			segments.pop();
		}

		for segment in target.split('/') {
			match segment {
				"" | "." => {}
				".." => {
					segments.pop();
				}
				other => segments.push(other),
			}
		}

		let mut out = String::new();
		for segment in &segments {
			out.push('/');
			out.push_str(segment);
		}
		if out.is_empty() {
			out.push('/');
		}

		NodePath(out)
	}
}

impl fmt::Display for NodePath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

#[cfg(test)]
mod tests;
