//! Activity log derivation
//!
//! The external API keeps no audit trail, so the activity log is rebuilt
//! from the current state of every asset: one "added" event per asset,
//! plus at most one event inferred from its status.

use uuid::Uuid;

use super::sort::{sort_activities, SortKey, SortOrder};
use crate::models::{ActionType, Activity, Asset, AssetStatus};

/// Derive the activity log for a snapshot of assets, newest first.
///
/// Entries whose timestamp cannot be parsed sort after every dated entry.
pub fn derive_activities(assets: &[Asset]) -> Vec<Activity> {
    let mut activities = Vec::with_capacity(assets.len() * 2);

    for (index, asset) in assets.iter().enumerate() {
        activities.push(added_activity(index, asset));
        if let Some(activity) = status_activity(index, asset) {
            activities.push(activity);
        }
    }

    sort_activities(&activities, SortKey::Timestamp, SortOrder::Desc)
}

fn added_activity(index: usize, asset: &Asset) -> Activity {
    let mut activity = base_activity(index, asset, ActionType::Added);
    activity.user = "System".to_string();
    activity.timestamp = asset.created_at.clone().unwrap_or_default();
    activity.notes = format!("New {} added to inventory", asset.asset_type);
    activity
}

fn status_activity(index: usize, asset: &Asset) -> Option<Activity> {
    let activity = match asset.status {
        AssetStatus::Assigned => {
            let assignment = asset.assignment.as_ref()?;
            let assigned_user = assignment.assigned_user.clone().unwrap_or_default();
            let mut activity = base_activity(index, asset, ActionType::Assigned);
            activity.timestamp = assignment.assignment_date.clone().unwrap_or_default();
            activity.notes = assignment
                .assignment_notes
                .clone()
                .filter(|notes| !notes.is_empty())
                .unwrap_or_else(|| format!("Assigned to {}", assigned_user));
            activity.performed_by = asset
                .assigned_by
                .clone()
                .filter(|by| !by.is_empty())
                .unwrap_or_else(|| "Admin".to_string());
            activity.user = assigned_user;
            activity
        }
        AssetStatus::Maintenance => {
            status_change(index, asset, ActionType::Maintenance, "IT Support")
        }
        AssetStatus::Reserved => status_change(index, asset, ActionType::Reserved, "HR"),
        AssetStatus::Returned => status_change(index, asset, ActionType::Returned, "HR"),
        AssetStatus::Available | AssetStatus::Unknown => return None,
    };
    Some(activity)
}

fn status_change(index: usize, asset: &Asset, action: ActionType, user: &str) -> Activity {
    let mut activity = base_activity(index, asset, action);
    activity.user = user.to_string();
    activity.timestamp = asset.updated_at.clone().unwrap_or_default();
    activity.notes = asset.notes.clone().unwrap_or_default();
    activity
}

fn base_activity(index: usize, asset: &Asset, action: ActionType) -> Activity {
    let asset_id = asset.id.clone().unwrap_or_default();
    Activity {
        id: activity_id(index, &asset_id, action),
        asset_id,
        asset_type: asset.asset_type.clone(),
        asset_name: asset.asset_name.clone(),
        serial_number: asset.serial_number.clone().unwrap_or_default(),
        action_type: action,
        user: String::new(),
        department: asset.department.clone().unwrap_or_default(),
        location: asset.location.clone().unwrap_or_default(),
        timestamp: String::new(),
        notes: String::new(),
        performed_by: asset.assigned_by.clone().unwrap_or_default(),
    }
}

/// Stable key for an activity: the same asset and action always map to the
/// same id, whatever the position of the asset in the snapshot. Assets
/// without an id fall back to their position.
pub fn activity_id(index: usize, asset_id: &str, action: ActionType) -> String {
    let name = if asset_id.is_empty() {
        format!("#{}:{}", index, action)
    } else {
        format!("{}:{}", asset_id, action)
    };
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Assignment;

    fn asset(id: &str, status: AssetStatus) -> Asset {
        Asset {
            id: Some(id.to_string()),
            asset_type: "laptop".to_string(),
            asset_name: format!("Laptop-{}", id),
            serial_number: Some(format!("SN-{}", id)),
            status,
            department: Some("IT".to_string()),
            location: Some("HQ".to_string()),
            created_at: Some("2024-01-01T00:00:00Z".to_string()),
            updated_at: Some("2024-03-01T00:00:00Z".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(derive_activities(&[]).is_empty());
    }

    #[test]
    fn test_assigned_asset_yields_two_activities() {
        let mut laptop = asset("1", AssetStatus::Assigned);
        laptop.asset_name = "Laptop-01".to_string();
        laptop.department = Some("Marketing".to_string());
        laptop.assignment = Some(Assignment {
            assigned_user: Some("Sarah Johnson".to_string()),
            assignment_date: Some("2024-02-01T00:00:00Z".to_string()),
            assignment_notes: None,
        });

        let activities = derive_activities(&[laptop]);
        assert_eq!(activities.len(), 2);

        // newest first
        assert_eq!(activities[0].action_type, ActionType::Assigned);
        assert_eq!(activities[0].timestamp, "2024-02-01T00:00:00Z");
        assert_eq!(activities[0].user, "Sarah Johnson");
        assert_eq!(activities[0].notes, "Assigned to Sarah Johnson");
        assert_eq!(activities[0].performed_by, "Admin");
        assert_eq!(activities[0].department, "Marketing");

        assert_eq!(activities[1].action_type, ActionType::Added);
        assert_eq!(activities[1].timestamp, "2024-01-01T00:00:00Z");
        assert_eq!(activities[1].user, "System");
        assert_eq!(activities[1].notes, "New laptop added to inventory");
    }

    #[test]
    fn test_assigned_without_assignment_record() {
        let activities = derive_activities(&[asset("1", AssetStatus::Assigned)]);
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].action_type, ActionType::Added);
    }

    #[test]
    fn test_activity_count_per_status() {
        let statuses = [
            (AssetStatus::Available, 1, None),
            (AssetStatus::Maintenance, 2, Some(("IT Support", ActionType::Maintenance))),
            (AssetStatus::Reserved, 2, Some(("HR", ActionType::Reserved))),
            (AssetStatus::Returned, 2, Some(("HR", ActionType::Returned))),
            (AssetStatus::Unknown, 1, None),
        ];

        for (status, expected, second) in statuses {
            let activities = derive_activities(&[asset("1", status)]);
            assert_eq!(activities.len(), expected, "status {:?}", status);
            if let Some((user, action)) = second {
                assert_eq!(activities[0].action_type, action);
                assert_eq!(activities[0].user, user);
                assert_eq!(activities[0].timestamp, "2024-03-01T00:00:00Z");
            }
        }
    }

    #[test]
    fn test_count_bounds() {
        let assets: Vec<Asset> = [
            AssetStatus::Available,
            AssetStatus::Maintenance,
            AssetStatus::Reserved,
            AssetStatus::Available,
        ]
        .iter()
        .enumerate()
        .map(|(i, status)| asset(&i.to_string(), *status))
        .collect();

        let activities = derive_activities(&assets);
        assert!(activities.len() >= assets.len());
        assert!(activities.len() <= assets.len() * 2);
        assert_eq!(activities.len(), 6);
    }

    #[test]
    fn test_missing_fields_become_empty_strings() {
        let bare = Asset {
            status: AssetStatus::Maintenance,
            ..Default::default()
        };
        let activities = derive_activities(&[bare]);
        assert_eq!(activities.len(), 2);
        for activity in &activities {
            assert_eq!(activity.asset_id, "");
            assert_eq!(activity.serial_number, "");
            assert_eq!(activity.timestamp, "");
            assert_eq!(activity.department, "");
            assert_eq!(activity.performed_by, "");
        }
    }

    #[test]
    fn test_undated_activities_sort_last() {
        let mut undated = asset("2", AssetStatus::Available);
        undated.created_at = Some("not a date".to_string());
        let dated = asset("1", AssetStatus::Available);

        let activities = derive_activities(&[undated, dated]);
        assert_eq!(activities[0].asset_id, "1");
        assert_eq!(activities[1].asset_id, "2");
    }

    #[test]
    fn test_ids_stable_across_reordering() {
        let a = asset("a", AssetStatus::Reserved);
        let b = asset("b", AssetStatus::Available);

        let first = derive_activities(&[a.clone(), b.clone()]);
        let second = derive_activities(&[b, a]);

        let mut first_ids: Vec<_> = first.iter().map(|x| x.id.clone()).collect();
        let mut second_ids: Vec<_> = second.iter().map(|x| x.id.clone()).collect();
        first_ids.sort();
        second_ids.sort();
        assert_eq!(first_ids, second_ids);

        first_ids.dedup();
        assert_eq!(first_ids.len(), 3);
    }
}
