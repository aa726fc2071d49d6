//! Scan session domain module.
//!
//! - `state`: what is currently displayed (`SessionState`)
//! - `gallery`: active image of the displayed result (`GallerySelection`)
//! - `scan_session`: the state machine (`ScanSession`, `ScanTicket`, `Resolution`)

mod gallery;
mod scan_session;
mod state;

pub use gallery::GallerySelection;
pub use scan_session::{Resolution, ScanSession, ScanTicket};
pub use state::SessionState;
