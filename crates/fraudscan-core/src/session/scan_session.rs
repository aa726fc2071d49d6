//! The scan state machine.
//!
//! ```text
//! Idle ──start_scan──▶ Loading ──verdict──▶ Result
//!   ▲                    │  └───rejection──▶ Error
//!   │                    └──transport failure──▶ Idle (retry url kept)
//!   └──────────── reset (from any state)
//! any state ──load_from_history──▶ Result
//! ```
//!
//! In-flight policy: a new scan supersedes the one in flight. Every
//! `start_scan` bumps a generation counter and hands out a [`ScanTicket`];
//! resolving with a ticket from an older generation is discarded. `reset`
//! and `load_from_history` also invalidate outstanding tickets.

use std::sync::Arc;

use super::gallery::GallerySelection;
use super::state::SessionState;
use crate::analysis::{AnalysisResponse, AnalysisResult, ScanRejection};
use crate::error::TransportError;
use crate::history::HistoryEntry;

/// Proof that a scan was started; required to resolve it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTicket {
    generation: u64,
    url: String,
}

impl ScanTicket {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// How a resolved scan changed the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Now showing `result`; the caller records it in history.
    Completed {
        url: String,
        result: Arc<AnalysisResult>,
    },
    /// Now showing the rejection.
    Rejected(ScanRejection),
    /// Back to idle; the failure is for the caller to report.
    Failed(TransportError),
    /// The ticket was superseded; nothing changed.
    Stale,
}

/// A single dashboard session: current state, gallery and in-flight bookkeeping.
#[derive(Debug, Default)]
pub struct ScanSession {
    state: SessionState,
    gallery: GallerySelection,
    generation: u64,
    retry_url: Option<String>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins scanning `url`.
    ///
    /// Returns `None` and leaves the state alone when the URL is blank.
    pub fn start_scan(&mut self, url: &str) -> Option<ScanTicket> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }

        if let SessionState::Loading { url: previous } = &self.state {
            tracing::debug!("Scan of {} superseded by {}", previous, url);
        }

        self.generation += 1;
        self.state = SessionState::Loading {
            url: url.to_string(),
        };
        self.gallery = GallerySelection::new();
        self.retry_url = None;

        Some(ScanTicket {
            generation: self.generation,
            url: url.to_string(),
        })
    }

    /// Applies the outcome of the request identified by `ticket`.
    pub fn resolve(
        &mut self,
        ticket: &ScanTicket,
        outcome: Result<AnalysisResponse, TransportError>,
    ) -> Resolution {
        if !self.is_current(ticket) {
            tracing::debug!("Discarding stale response for {}", ticket.url);
            return Resolution::Stale;
        }

        match outcome {
            Ok(AnalysisResponse::Verdict(result)) => {
                let result = Arc::new(result);
                self.show_result(result.clone(), ticket.url.clone());
                Resolution::Completed {
                    url: ticket.url.clone(),
                    result,
                }
            }
            Ok(AnalysisResponse::Rejected(rejection)) => {
                self.state = SessionState::Error(rejection.clone());
                Resolution::Rejected(rejection)
            }
            Err(error) => {
                self.state = SessionState::Idle;
                self.retry_url = Some(ticket.url.clone());
                Resolution::Failed(error)
            }
        }
    }

    /// Shows a cached result without contacting the service.
    pub fn load_from_history(&mut self, entry: &HistoryEntry) {
        self.generation += 1;
        self.retry_url = None;
        self.show_result(entry.result.clone(), entry.url.clone());
    }

    /// Returns to idle, dropping result, error, gallery and retry URL.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = SessionState::Idle;
        self.gallery = GallerySelection::new();
        self.retry_url = None;
    }

    /// Restarts the last scan that failed in transport, if any.
    pub fn retry(&mut self) -> Option<ScanTicket> {
        let url = self.retry_url.clone()?;
        self.start_scan(&url)
    }

    pub fn select_image(&mut self, url: &str) -> bool {
        self.gallery.select(url)
    }

    pub fn select_image_index(&mut self, index: usize) -> bool {
        self.gallery.select_index(index)
    }

    pub fn clear_image(&mut self) {
        self.gallery.clear();
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn active_image(&self) -> Option<&str> {
        self.gallery.active()
    }

    pub fn retry_url(&self) -> Option<&str> {
        self.retry_url.as_deref()
    }

    pub fn is_current(&self, ticket: &ScanTicket) -> bool {
        ticket.generation == self.generation && self.state.is_loading()
    }

    fn show_result(&mut self, result: Arc<AnalysisResult>, source_url: String) {
        self.gallery.initialize(result.images());
        self.state = SessionState::Result { result, source_url };
    }
}
