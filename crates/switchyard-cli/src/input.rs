//! Activity input decoding
//!
//! Accepts a JSON array of activities, a single activity object, or a stream
//! of activity objects (one per line or simply concatenated).

use std::io::Read;
use std::path::Path;

use switchyard::Activity;

use crate::error::CliError;

/// Read raw input from `path`, or stdin when `path` is `-`
pub fn read_source(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).map_err(|e| {
            CliError::InvalidInput(format!("Failed to read {}: {}", path.display(), e))
        })
    }
}

/// Decode every activity in `input`
pub fn parse_activities(input: &str) -> Result<Vec<Activity>, CliError> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return Err(CliError::InvalidInput("No activities in input".to_string()));
    }

    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    serde_json::Deserializer::from_str(trimmed)
        .into_iter::<Activity>()
        .map(|activity| activity.map_err(CliError::from))
        .collect()
}
