pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{CliConfig, FileConfig, Settings};
pub use crate::core::analysis::SerpAnalysis;
pub use crate::core::client::RestClient;
pub use crate::domain::model::{Device, PixelRank, RankRow, SerpRequest};
pub use crate::utils::error::{Result, SerpError};
