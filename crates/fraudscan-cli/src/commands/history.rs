use anyhow::{Result, bail};
use fraudscan_application::ScanUseCase;

use crate::cli::HistoryAction;
use crate::render;

/// `fraudscan history [list|delete <n>|clear]`.
pub async fn run(usecase: &ScanUseCase, action: HistoryAction) -> Result<()> {
    match action {
        HistoryAction::List => render::print_history(&usecase.view().await.history),
        HistoryAction::Delete { number } => {
            let Some(index) = number.checked_sub(1) else {
                bail!("History numbers start at 1");
            };
            match usecase.delete_history(index).await? {
                Some(entry) => println!("Deleted {}", entry.url),
                None => bail!("No history entry {number}"),
            }
        }
        HistoryAction::Clear => {
            usecase.clear_history().await?;
            println!("History cleared.");
        }
    }
    Ok(())
}
