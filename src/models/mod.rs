//! Data models for the asset dashboard

pub mod activity;
pub mod asset;
pub mod enums;
pub mod reference;
pub mod report;
pub mod user;

pub use activity::Activity;
pub use asset::{Asset, Assignment, CountBucket, InventoryOverview};
pub use enums::{ActionType, AssetCondition, AssetStatus};
pub use reference::{NewReference, ReferenceEntry, ReferenceKind};
pub use report::{DistributionEntry, ReportSummary, ValueEntry};
pub use user::{AddedBy, ChangePassword, NewUser, UpdateUser, User};
