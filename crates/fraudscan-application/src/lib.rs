//! Application layer for the fraud-scan dashboard.
//!
//! Coordinates the synchronous core aggregate with the async analysis
//! service.

pub mod scan_usecase;

pub use scan_usecase::{ScanOutcome, ScanUseCase};
