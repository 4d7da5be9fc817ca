use agenda_core::orchestrator::LoadState;
use agenda_core::sort::SortSpec;
use anyhow::Result;

use crate::commands::build_orchestrator;
use crate::render;
use crate::tui;

pub async fn run(spec: SortSpec) -> Result<()> {
    let mut orch = build_orchestrator()?.with_sort(spec);

    let spinner = tui::spinner("Loading events...");
    orch.refresh().await;
    spinner.finish_and_clear();

    if orch.state() != LoadState::Loaded {
        // The failure was already surfaced as a notification.
        return Ok(());
    }

    render::render_events(orch.events());

    Ok(())
}
