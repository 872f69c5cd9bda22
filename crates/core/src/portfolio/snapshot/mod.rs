mod snapshot_model;
mod snapshot_service;
mod snapshot_traits;


pub use snapshot_model::{DailySummary, PortfolioSnapshot, GAIN_MESSAGE, LOSS_MESSAGE};
pub use snapshot_service::SnapshotService;
pub use snapshot_traits::{SnapshotRepositoryTrait, SnapshotServiceTrait};
