use anyhow::Result;

use crate::commands::{build_orchestrator, resolve_event};

pub async fn run(id: i64) -> Result<()> {
    let mut orch = build_orchestrator()?;
    let event = resolve_event(&mut orch, id).await?;

    orch.edit_flow(&event).await?;

    Ok(())
}
