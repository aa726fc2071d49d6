//! Scan use case implementation.
//!
//! Drives the synchronous [`Dashboard`] from async callers: the service call
//! runs without holding the dashboard lock, and a newer scan cancels the
//! request it replaces.

use std::sync::Arc;

use fraudscan_core::Dashboard;
use fraudscan_core::ViewProjection;
use fraudscan_core::analysis::AnalysisService;
use fraudscan_core::error::{FraudScanError, TransportError};
use fraudscan_core::history::HistoryEntry;
use fraudscan_core::session::{Resolution, ScanTicket};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// How a scan attempt ended, from the caller's point of view.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// A verdict is displayed and was recorded in history.
    Completed(ViewProjection),
    /// The service declined the listing; the rejection is displayed.
    Rejected(ViewProjection),
    /// A later scan, reset or history replay replaced this one.
    Superseded,
    /// Nothing to scan (blank URL, or nothing to retry).
    Ignored,
}

struct Inner {
    dashboard: Dashboard,
    in_flight: Option<CancellationToken>,
}

impl Inner {
    fn cancel_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }
}

/// Use case for scanning listings and browsing the scan history.
///
/// # Responsibilities
///
/// - Issue at most one effective analysis request at a time (newest wins)
/// - Keep the dashboard lock out of network waits
/// - Hand back a fresh [`ViewProjection`] after every mutation
///
/// # Thread Safety
///
/// Cheap to share behind an `Arc`; all state sits behind one async mutex.
pub struct ScanUseCase {
    inner: Mutex<Inner>,
    service: Arc<dyn AnalysisService>,
}

impl ScanUseCase {
    pub fn new(dashboard: Dashboard, service: Arc<dyn AnalysisService>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                dashboard,
                in_flight: None,
            }),
            service,
        }
    }

    /// Scans `url`, superseding any scan still in flight.
    ///
    /// Transport failures are returned as errors; the dashboard is back to
    /// idle with the URL kept for [`ScanUseCase::retry`].
    pub async fn scan(&self, url: &str) -> Result<ScanOutcome, TransportError> {
        let started = {
            let mut inner = self.inner.lock().await;
            inner.dashboard.start_scan(url).map(|ticket| {
                let token = CancellationToken::new();
                if let Some(previous) = inner.in_flight.replace(token.clone()) {
                    previous.cancel();
                }
                (ticket, token)
            })
        };

        match started {
            Some((ticket, token)) => self.run(ticket, token).await,
            None => Ok(ScanOutcome::Ignored),
        }
    }

    /// Re-issues the last scan that failed in transport.
    pub async fn retry(&self) -> Result<ScanOutcome, TransportError> {
        let url = {
            let inner = self.inner.lock().await;
            inner.dashboard.session().retry_url().map(str::to_string)
        };
        match url {
            Some(url) => self.scan(&url).await,
            None => Ok(ScanOutcome::Ignored),
        }
    }

    async fn run(
        &self,
        ticket: ScanTicket,
        token: CancellationToken,
    ) -> Result<ScanOutcome, TransportError> {
        let outcome = tokio::select! {
            _ = token.cancelled() => Err(TransportError::Cancelled),
            outcome = self.service.analyze(ticket.url()) => outcome,
        };

        let mut inner = self.inner.lock().await;
        let resolution = inner.dashboard.resolve(&ticket, outcome);
        if !matches!(resolution, Resolution::Stale) {
            inner.in_flight = None;
        }

        match resolution {
            Resolution::Completed { .. } => Ok(ScanOutcome::Completed(inner.dashboard.view())),
            Resolution::Rejected(_) => Ok(ScanOutcome::Rejected(inner.dashboard.view())),
            Resolution::Failed(error) => Err(error),
            Resolution::Stale => Ok(ScanOutcome::Superseded),
        }
    }

    /// Shows the history entry at `index` (0 = most recent).
    ///
    /// A missing entry leaves the session and any scan in flight untouched.
    pub async fn load_from_history(&self, index: usize) -> Result<ViewProjection, FraudScanError> {
        let mut inner = self.inner.lock().await;
        inner.dashboard.load_from_history(index)?;
        inner.cancel_in_flight();
        Ok(inner.dashboard.view())
    }

    /// Deletes the history entry at `index`. Out-of-range indices are a no-op.
    pub async fn delete_history(
        &self,
        index: usize,
    ) -> Result<Option<HistoryEntry>, FraudScanError> {
        let mut inner = self.inner.lock().await;
        let removed = inner.dashboard.remove_history(index)?;
        if let Some(entry) = &removed {
            tracing::info!("Deleted {} from history", entry.url);
        }
        Ok(removed)
    }

    pub async fn clear_history(&self) -> Result<(), FraudScanError> {
        let mut inner = self.inner.lock().await;
        inner.dashboard.clear_history()?;
        tracing::info!("History cleared");
        Ok(())
    }

    /// Back to a blank dashboard. Any scan in flight is abandoned.
    pub async fn reset(&self) -> ViewProjection {
        let mut inner = self.inner.lock().await;
        inner.cancel_in_flight();
        inner.dashboard.reset();
        inner.dashboard.view()
    }

    pub async fn select_image(&self, url: &str) -> bool {
        self.inner.lock().await.dashboard.select_image(url)
    }

    pub async fn select_image_index(&self, index: usize) -> bool {
        self.inner.lock().await.dashboard.select_image_index(index)
    }

    pub async fn clear_image(&self) {
        self.inner.lock().await.dashboard.clear_image();
    }

    pub async fn view(&self) -> ViewProjection {
        self.inner.lock().await.dashboard.view()
    }
}
