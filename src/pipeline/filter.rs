//! Filter predicates over activities and assets
//!
//! Criteria are typed records built once at the HTTP boundary; the "all"
//! sentinel of the dashboard dropdowns is already mapped to `None` there.
//! Every filter returns a new vector and keeps the relative input order.

use chrono::{DateTime, Utc};

use super::timestamp::parse_timestamp;
use crate::models::{ActionType, Activity, Asset, AssetCondition, AssetStatus};

/// Inclusive date range; a missing bound is not enforced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn is_set(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Undated values only pass an unbounded range
    pub fn contains(&self, value: Option<DateTime<Utc>>) -> bool {
        if !self.is_set() {
            return true;
        }
        let Some(value) = value else {
            return false;
        };
        self.from.map_or(true, |from| value >= from) && self.to.map_or(true, |to| value <= to)
    }
}

/// Activity log filters, combined with logical AND
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityCriteria {
    /// Selected tab of the activity page
    pub tab: Option<ActionType>,
    pub action_type: Option<ActionType>,
    /// Free-text search; blank means no search
    pub search: Option<String>,
    pub asset_type: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub date_range: DateRange,
}

impl ActivityCriteria {
    /// Number of dropdown/date filters in use (search and tab excluded)
    pub fn active_filter_count(&self) -> usize {
        [
            self.asset_type.is_some(),
            self.action_type.is_some(),
            self.department.is_some(),
            self.location.is_some(),
            self.date_range.is_set(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    fn matches(&self, activity: &Activity, term: Option<&str>) -> bool {
        if self.tab.is_some_and(|tab| activity.action_type != tab) {
            return false;
        }
        if self.action_type.is_some_and(|action| activity.action_type != action) {
            return false;
        }
        if let Some(term) = term {
            let hit = [
                &activity.serial_number,
                &activity.asset_name,
                &activity.user,
                &activity.department,
                &activity.notes,
            ]
            .iter()
            .any(|field| contains_folded(field, term));
            if !hit {
                return false;
            }
        }
        if !eq_folded(self.asset_type.as_deref(), &activity.asset_type)
            || !eq_folded(self.department.as_deref(), &activity.department)
            || !eq_folded(self.location.as_deref(), &activity.location)
        {
            return false;
        }
        if self.date_range.is_set() && !self.date_range.contains(parse_timestamp(&activity.timestamp)) {
            return false;
        }
        true
    }
}

/// Keep the activities matching every criterion
pub fn filter_activities(activities: &[Activity], criteria: &ActivityCriteria) -> Vec<Activity> {
    let term = search_term(criteria.search.as_deref());
    activities
        .iter()
        .filter(|activity| criteria.matches(activity, term.as_deref()))
        .cloned()
        .collect()
}

/// Inventory list filters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetCriteria {
    pub search: Option<String>,
    pub status: Option<AssetStatus>,
    pub asset_type: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
}

impl AssetCriteria {
    fn matches(&self, asset: &Asset, term: Option<&str>) -> bool {
        if let Some(term) = term {
            if !asset_matches_search(asset, term) {
                return false;
            }
        }
        self.status.map_or(true, |status| asset.status == status)
            && self.asset_type.as_deref().map_or(true, |t| asset.asset_type == t)
            && self.department.as_deref().map_or(true, |d| asset.department.as_deref() == Some(d))
            && self.location.as_deref().map_or(true, |l| asset.location.as_deref() == Some(l))
    }
}

/// Keep the assets matching every inventory criterion
pub fn filter_assets(assets: &[Asset], criteria: &AssetCriteria) -> Vec<Asset> {
    let term = search_term(criteria.search.as_deref());
    assets
        .iter()
        .filter(|asset| criteria.matches(asset, term.as_deref()))
        .cloned()
        .collect()
}

/// Assets currently in maintenance, narrowed by an optional search
pub fn maintenance_assets(assets: &[Asset], search: Option<&str>) -> Vec<Asset> {
    let criteria = AssetCriteria {
        search: search.map(str::to_string),
        status: Some(AssetStatus::Maintenance),
        ..Default::default()
    };
    filter_assets(assets, &criteria)
}

/// Reports page filters; the date range applies to the purchase date
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportCriteria {
    pub purchase_range: DateRange,
    pub asset_type: Option<String>,
    pub status: Option<AssetStatus>,
    pub department: Option<String>,
    pub location: Option<String>,
    /// Empty means any condition
    pub conditions: Vec<AssetCondition>,
}

impl ReportCriteria {
    fn matches(&self, asset: &Asset) -> bool {
        if self.purchase_range.is_set() {
            let purchased = asset.purchase_date.as_deref().and_then(parse_timestamp);
            if !self.purchase_range.contains(purchased) {
                return false;
            }
        }
        self.asset_type.as_deref().map_or(true, |t| asset.asset_type == t)
            && self.status.map_or(true, |status| asset.status == status)
            && self.department.as_deref().map_or(true, |d| asset.department.as_deref() == Some(d))
            && self.location.as_deref().map_or(true, |l| asset.location.as_deref() == Some(l))
            && (self.conditions.is_empty() || self.conditions.contains(&asset.condition))
    }
}

pub fn filter_report_assets(assets: &[Asset], criteria: &ReportCriteria) -> Vec<Asset> {
    assets
        .iter()
        .filter(|asset| criteria.matches(asset))
        .cloned()
        .collect()
}

fn asset_matches_search(asset: &Asset, term: &str) -> bool {
    contains_folded(&asset.asset_name, term)
        || asset.serial_number.as_deref().is_some_and(|s| contains_folded(s, term))
        || contains_folded(&asset.manufacturer, term)
        || contains_folded(&asset.model, term)
        || asset.assigned_user().is_some_and(|u| contains_folded(u, term))
}

/// Lowercased search term, `None` when blank
fn search_term(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase)
}

fn contains_folded(haystack: &str, lowered_term: &str) -> bool {
    haystack.to_lowercase().contains(lowered_term)
}

fn eq_folded(expected: Option<&str>, actual: &str) -> bool {
    expected.map_or(true, |expected| expected.to_lowercase() == actual.to_lowercase())
}
