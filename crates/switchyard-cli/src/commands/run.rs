//! Run command handler

use std::io::Write;

use switchyard::handlers::TRACE_KEY;
use switchyard::{Activity, ActivityHandler, SwitchyardConfig, TurnContext};
use tracing::info;

use crate::error::CliError;

/// Dispatch each activity in order through a handler built from `config`
///
/// Stops at the first handler error.
pub async fn run_run(
    activities: Vec<Activity>,
    config: &SwitchyardConfig,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let app = ActivityHandler::from_config(config)?;
    info!(
        handlers = app.registry().total(),
        activities = activities.len(),
        "dispatching activities"
    );

    for activity in activities {
        let route = app.route(&activity);
        let mut ctx = TurnContext::new(activity);
        app.run(&mut ctx).await?;

        writeln!(out, "turn {}", ctx.id())?;
        writeln!(out, "  route:   {}", route)?;
        if let Some(visited) = ctx.get::<Vec<String>>(TRACE_KEY)? {
            writeln!(out, "  visited: {}", visited.join(" > "))?;
        }
        for reply in ctx.responses() {
            writeln!(out, "  reply:   {}", reply.text.as_deref().unwrap_or(""))?;
        }
    }

    Ok(())
}
