//! Users and reference lists (categories, departments, locations)

use std::sync::Arc;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{ChangePassword, NewReference, NewUser, ReferenceEntry, ReferenceKind, UpdateUser, User},
    repository::{Credentials, DirectorySource},
};

use super::cache::{Snapshot, SnapshotCache};

#[derive(Clone)]
pub struct DirectoryService {
    source: Arc<dyn DirectorySource>,
    users: SnapshotCache<Credentials, User>,
    references: SnapshotCache<(ReferenceKind, Credentials), ReferenceEntry>,
}

impl DirectoryService {
    pub fn new(source: Arc<dyn DirectorySource>) -> Self {
        Self {
            source,
            users: SnapshotCache::new("User"),
            references: SnapshotCache::new("Reference"),
        }
    }

    /// Profile of the caller
    pub async fn current_user(&self, credentials: &Credentials) -> AppResult<User> {
        self.source
            .current_user(credentials)
            .await?
            .ok_or_else(|| AppError::NotFound("Current user not found".to_string()))
    }

    pub async fn users(&self, credentials: &Credentials) -> AppResult<Snapshot<User>> {
        self.users
            .get_or_fetch(credentials, || self.source.list_users(credentials))
            .await
    }

    pub async fn add_user(&self, credentials: &Credentials, user: &NewUser) -> AppResult<Option<User>> {
        user.validate()?;
        let created = self.source.add_user(credentials, user).await?;
        self.users.invalidate().await;
        tracing::info!("User '{}' added", user.name);
        Ok(created)
    }

    pub async fn update_user(&self, credentials: &Credentials, user: &UpdateUser) -> AppResult<Option<User>> {
        user.validate()?;
        let updated = self.source.update_user(credentials, user).await?;
        self.users.invalidate().await;
        tracing::info!("User {} updated", user.id);
        Ok(updated)
    }

    pub async fn change_password(&self, credentials: &Credentials, change: &ChangePassword) -> AppResult<()> {
        let change = change.trimmed();
        change.validate()?;
        if change.password == change.new_password {
            return Err(AppError::Validation(
                "New password must differ from the current one".to_string(),
            ));
        }
        self.source.change_password(credentials, &change).await?;
        tracing::info!("Password changed");
        Ok(())
    }

    /// Cached category, department or location list
    pub async fn references(
        &self,
        credentials: &Credentials,
        kind: ReferenceKind,
    ) -> AppResult<Snapshot<ReferenceEntry>> {
        self.references
            .get_or_fetch(&(kind, credentials.clone()), || {
                self.source.list_references(credentials, kind)
            })
            .await
    }

    pub async fn create_reference(
        &self,
        credentials: &Credentials,
        kind: ReferenceKind,
        entry: &NewReference,
    ) -> AppResult<Option<ReferenceEntry>> {
        let entry = entry.trimmed();
        entry.validate()?;
        let created = self.source.create_reference(credentials, kind, &entry).await?;
        self.references.invalidate().await;
        tracing::info!("Added {} '{}'", kind, entry.name);
        Ok(created)
    }

    /// Categories with asset counts, always fetched fresh
    pub async fn asset_categories(&self, credentials: &Credentials) -> AppResult<Vec<ReferenceEntry>> {
        self.source.asset_categories(credentials).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockDirectorySource;

    fn entry(name: &str) -> ReferenceEntry {
        ReferenceEntry {
            id: Some(name.to_lowercase()),
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn service(source: MockDirectorySource) -> DirectoryService {
        DirectoryService::new(Arc::new(source))
    }

    #[tokio::test]
    async fn test_references_cached_per_kind() {
        let mut source = MockDirectorySource::new();
        source
            .expect_list_references()
            .times(2)
            .returning(|_, kind| match kind {
                ReferenceKind::Department => Ok(vec![entry("IT"), entry("HR")]),
                _ => Ok(vec![entry("HQ")]),
            });
        let service = service(source);
        let credentials = Credentials::bearer("token");

        let departments = service.references(&credentials, ReferenceKind::Department).await.unwrap();
        let locations = service.references(&credentials, ReferenceKind::Location).await.unwrap();
        assert_eq!(departments.len(), 2);
        assert_eq!(locations[0].name, "HQ");
        // both served from memory now
        service.references(&credentials, ReferenceKind::Department).await.unwrap();
        service.references(&credentials, ReferenceKind::Location).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_reference_invalidates() {
        let mut source = MockDirectorySource::new();
        source
            .expect_list_references()
            .times(2)
            .returning(|_, _| Ok(vec![entry("Laptops")]));
        source
            .expect_create_reference()
            .times(1)
            .withf(|_, kind, entry| *kind == ReferenceKind::Category && entry.name == "Printers")
            .returning(|_, _, entry| Ok(Some(ReferenceEntry {
                name: entry.name.clone(),
                ..Default::default()
            })));
        let service = service(source);
        let credentials = Credentials::bearer("token");

        service.references(&credentials, ReferenceKind::Category).await.unwrap();
        let created = service
            .create_reference(&credentials, ReferenceKind::Category, &NewReference { name: "  Printers ".into() })
            .await
            .unwrap();
        assert_eq!(created.unwrap().name, "Printers");
        service.references(&credentials, ReferenceKind::Category).await.unwrap();
    }

    #[tokio::test]
    async fn test_blank_reference_rejected() {
        let mut source = MockDirectorySource::new();
        source.expect_create_reference().never();
        let result = service(source)
            .create_reference(&Credentials::default(), ReferenceKind::Location, &NewReference { name: " ".into() })
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_add_user_invalidates_users() {
        let mut source = MockDirectorySource::new();
        source
            .expect_list_users()
            .times(2)
            .returning(|_| Ok(vec![User { name: "Ana".into(), ..Default::default() }]));
        source.expect_add_user().times(1).returning(|_, user| {
            Ok(Some(User {
                name: user.name.clone(),
                ..Default::default()
            }))
        });
        let service = service(source);
        let credentials = Credentials::bearer("token");

        service.users(&credentials).await.unwrap();
        let new_user = NewUser {
            name: "Ben".into(),
            password: "longenough".into(),
            role: "user".into(),
            department: "IT".into(),
            location: "HQ".into(),
            added_by: None,
        };
        service.add_user(&credentials, &new_user).await.unwrap();
        service.users(&credentials).await.unwrap();
    }

    #[tokio::test]
    async fn test_change_password_rules() {
        let mut source = MockDirectorySource::new();
        source
            .expect_change_password()
            .times(1)
            .withf(|_, change| change.password == "current" && change.new_password == "brand-new-pass")
            .returning(|_, _| Ok(()));
        let service = service(source);
        let credentials = Credentials::bearer("token");

        let same = ChangePassword {
            password: "samesame1".into(),
            new_password: "samesame1".into(),
        };
        assert!(service.change_password(&credentials, &same).await.is_err());

        let change = ChangePassword {
            password: " current ".into(),
            new_password: "brand-new-pass ".into(),
        };
        service.change_password(&credentials, &change).await.unwrap();
    }

    #[tokio::test]
    async fn test_current_user_missing() {
        let mut source = MockDirectorySource::new();
        source.expect_current_user().returning(|_| Ok(None));
        let result = service(source).current_user(&Credentials::default()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
