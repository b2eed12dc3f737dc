use std::path::PathBuf;

use scenetab::scene::Result;
use scenetab::table::PropertiesTable;

use crate::cmd::util::{path_args, stream_json_rows};

pub fn run(path: PathBuf, batch_size: usize) -> Result<()> {
	let table = PropertiesTable::bind(&path_args(&path))?;
	let mut query = table.open()?;
	stream_json_rows(&mut query, batch_size)
}
