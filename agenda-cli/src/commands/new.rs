use anyhow::Result;

use crate::commands::build_orchestrator;

pub async fn run() -> Result<()> {
    let mut orch = build_orchestrator()?;
    orch.create_flow().await?;

    Ok(())
}
