//! Activity log and list-view pipeline
//!
//! Pure, synchronous transformations over an in-memory asset snapshot:
//! derive activities, filter, sort, paginate. Nothing here touches the
//! network or shared state; callers pass the snapshot in.

pub mod activities;
pub mod filter;
pub mod options;
pub mod paginate;
pub mod report;
pub mod sort;
pub mod timestamp;

pub use activities::derive_activities;
pub use filter::{
    filter_activities, filter_assets, filter_report_assets, maintenance_assets, ActivityCriteria,
    AssetCriteria, DateRange, ReportCriteria,
};
pub use options::{filter_options, FilterOptions};
pub use paginate::{clamp_page, page_buttons, page_count, paginate, Page, PageButton};
pub use report::summarize;
pub use sort::{collate, sort_activities, SortKey, SortOrder};
pub use timestamp::{parse_range_bound, parse_timestamp};
