use anyhow::Result;

use crate::commands::{build_orchestrator, resolve_event};
use crate::render;

pub async fn run(id: i64) -> Result<()> {
    let mut orch = build_orchestrator()?;
    let event = resolve_event(&mut orch, id).await?;

    render::render_event_details(&event);

    Ok(())
}
