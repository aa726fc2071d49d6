//! Dashboard aggregate: one scan session plus the persisted history.

use crate::analysis::AnalysisResponse;
use crate::error::{FraudScanError, Result, TransportError};
use crate::history::{HistoryCache, HistoryEntry};
use crate::session::{Resolution, ScanSession, ScanTicket};
use crate::view::ViewProjection;

/// Synchronous composition of [`ScanSession`] and [`HistoryCache`].
///
/// Each method is one discrete event; it runs to completion before the next
/// one is handled. The network call itself happens outside, between
/// [`Dashboard::start_scan`] and [`Dashboard::resolve`].
pub struct Dashboard {
    session: ScanSession,
    history: HistoryCache,
}

impl Dashboard {
    pub fn new(history: HistoryCache) -> Self {
        Self {
            session: ScanSession::new(),
            history,
        }
    }

    pub fn start_scan(&mut self, url: &str) -> Option<ScanTicket> {
        let ticket = self.session.start_scan(url)?;
        tracing::info!("Scanning {}", ticket.url());
        Some(ticket)
    }

    /// Applies a service outcome and records fresh verdicts in history.
    ///
    /// A history write failure is logged; the verdict is still shown.
    pub fn resolve(
        &mut self,
        ticket: &ScanTicket,
        outcome: std::result::Result<AnalysisResponse, TransportError>,
    ) -> Resolution {
        let resolution = self.session.resolve(ticket, outcome);
        match &resolution {
            Resolution::Completed { url, result } => {
                if let Err(e) = self.history.record(url, result.clone()) {
                    tracing::warn!("Verdict for {} shown but not saved: {}", url, e);
                }
            }
            Resolution::Rejected(rejection) => {
                tracing::info!("Scan of {} rejected: {}", ticket.url(), rejection.message);
            }
            Resolution::Failed(error) => {
                tracing::warn!("Scan of {} failed: {}", ticket.url(), error);
            }
            Resolution::Stale => {}
        }
        resolution
    }

    /// Replays the history entry at `index`.
    pub fn load_from_history(&mut self, index: usize) -> Result<&HistoryEntry> {
        let entry = self
            .history
            .entry_at(index)
            .ok_or_else(|| FraudScanError::not_found("history entry", (index + 1).to_string()))?;
        tracing::debug!("Replaying {} from history", entry.url);
        self.session.load_from_history(entry);
        Ok(entry)
    }

    pub fn remove_history(&mut self, index: usize) -> Result<Option<HistoryEntry>> {
        self.history.remove(index)
    }

    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear()
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn retry(&mut self) -> Option<ScanTicket> {
        self.session.retry()
    }

    pub fn select_image(&mut self, url: &str) -> bool {
        self.session.select_image(url)
    }

    pub fn select_image_index(&mut self, index: usize) -> bool {
        self.session.select_image_index(index)
    }

    pub fn clear_image(&mut self) {
        self.session.clear_image();
    }

    pub fn session(&self) -> &ScanSession {
        &self.session
    }

    pub fn history(&self) -> &HistoryCache {
        &self.history
    }

    pub fn view(&self) -> ViewProjection {
        ViewProjection::project(&self.session, self.history.snapshot())
    }
}
