pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::kasi::KasiLunarClient;
pub use config::CliConfig;
pub use server::{router, AppState};
pub use utils::error::{Result, SajuError};
