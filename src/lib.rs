pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod host;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::DashboardConfig;
pub use crate::core::aggregate::{aggregate, bar_series, pie_series};
pub use crate::core::dashboard::{Dashboard, DashboardInput, DashboardView};
pub use crate::core::word_count::count;
pub use host::{ChangeEvent, Session};
pub use utils::error::{DashboardError, Result};
