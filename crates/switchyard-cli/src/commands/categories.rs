//! Categories command handler

use std::io::Write;

use strum::IntoEnumIterator;
use switchyard::Category;

use crate::error::CliError;

pub fn run_categories(out: &mut impl Write) -> Result<(), CliError> {
    for category in Category::iter() {
        writeln!(out, "{}", category)?;
    }
    Ok(())
}
