use anyhow::{Result, bail};
use fraudscan_application::{ScanOutcome, ScanUseCase};

use crate::render;

/// `fraudscan scan <url>`: scans once and prints the dashboard.
pub async fn run(usecase: &ScanUseCase, url: &str, json: bool) -> Result<()> {
    match usecase.scan(url).await {
        Ok(ScanOutcome::Completed(view)) | Ok(ScanOutcome::Rejected(view)) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                render::print_view(&view);
            }
            Ok(())
        }
        Ok(ScanOutcome::Ignored) => bail!("Nothing to scan: the URL is blank"),
        Ok(ScanOutcome::Superseded) => bail!("Scan of {url} was superseded"),
        Err(error) => {
            render::print_transport_error(&error, false);
            Err(error.into())
        }
    }
}
