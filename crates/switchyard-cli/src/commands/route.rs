//! Route command handler

use std::io::Write;

use switchyard::{Activity, resolve};

use crate::error::CliError;

/// Print the resolved route of each activity
pub fn run_route(activities: &[Activity], out: &mut impl Write) -> Result<(), CliError> {
    for (i, activity) in activities.iter().enumerate() {
        writeln!(
            out,
            "{}\t{}\t{}",
            i,
            activity.kind.as_deref().unwrap_or("<none>"),
            resolve(activity)
        )?;
    }
    Ok(())
}
