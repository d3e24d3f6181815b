//! LaneCut Timeline - data model for the single-lane arrangement
//!
//! - Media assets and the asset catalog
//! - Clips and the lane (ordered clips with overlap-avoiding placement)
//! - The shared timeline state

pub mod asset;
pub mod clip;
pub mod lane;
pub mod state;

pub use asset::{parse_duration, AssetCatalog, MediaAsset};
pub use clip::Clip;
pub use lane::Lane;
pub use state::TimelineState;
