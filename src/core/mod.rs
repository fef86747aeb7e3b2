pub mod analysis;
pub mod client;
pub mod keywords;
pub mod pixel_rank;
pub mod report;

pub use crate::domain::model::{PixelRank, RankRow, SerpItem, SerpRequest, SerpResponse};
pub use crate::domain::ports::SerpProvider;
pub use crate::utils::error::Result;
