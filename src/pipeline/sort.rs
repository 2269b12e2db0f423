//! Activity ordering

use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};
use utoipa::ToSchema;

use super::timestamp::parse_timestamp;
use crate::models::Activity;

/// Field an activity list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Timestamp,
    AssetName,
    AssetType,
    User,
    /// Unrecognized key: input order is kept
    #[serde(other)]
    Unsorted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Return a sorted copy of `activities`. The sort is stable: ties keep
/// their input order. Unparseable timestamps count as the oldest.
pub fn sort_activities(activities: &[Activity], key: SortKey, order: SortOrder) -> Vec<Activity> {
    let mut sorted = activities.to_vec();
    match key {
        SortKey::Timestamp => sort_by_key(&mut sorted, order, |a| parse_timestamp(&a.timestamp)),
        SortKey::AssetName => sort_by_key(&mut sorted, order, |a| CollationKey::new(&a.asset_name)),
        SortKey::AssetType => sort_by_key(&mut sorted, order, |a| CollationKey::new(&a.asset_type)),
        SortKey::User => sort_by_key(&mut sorted, order, |a| CollationKey::new(&a.user)),
        SortKey::Unsorted => {}
    }
    sorted
}

/// Stable sort of `items` on a derived key
pub fn sort_by_key<T, K, F>(items: &mut [T], order: SortOrder, key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    match order {
        SortOrder::Asc => items.sort_by_cached_key(|item| key(item)),
        SortOrder::Desc => items.sort_by_cached_key(|item| Reverse(key(item))),
    }
}

/// Locale-aware string comparison: letters first ignoring accents and case,
/// then accents, then lowercase before uppercase.
pub fn collate(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    base: String,
    accents: String,
    case: Vec<bool>,
}

impl CollationKey {
    pub fn new(s: &str) -> Self {
        Self {
            base: s
                .nfd()
                .filter(|c| !is_combining_mark(*c))
                .flat_map(char::to_lowercase)
                .collect(),
            accents: s.nfd().flat_map(char::to_lowercase).collect(),
            case: s.chars().map(char::is_uppercase).collect(),
        }
    }
}
