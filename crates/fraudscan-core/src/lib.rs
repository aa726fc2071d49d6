pub mod analysis;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod history;
pub mod session;
pub mod view;

// Re-export common types
pub use dashboard::Dashboard;
pub use error::{FraudScanError, TransportError};
pub use view::ViewProjection;
