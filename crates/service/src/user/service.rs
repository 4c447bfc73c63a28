use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use common::pagination::Pagination;
use models::user::{self, User};

use super::domain::{CreateUser, UpdateUser};
use super::repository::UserRepository;
use crate::audit::{AuditEvent, AuditSink};
use crate::errors::ServiceError;

/// User CRUD service independent of any web framework.
pub struct UserService<R: UserRepository> {
    repo: Arc<R>,
    audit: Arc<dyn AuditSink>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: Arc<R>, audit: Arc<dyn AuditSink>) -> Self {
        Self { repo, audit }
    }

    /// All users in the store's natural order; an empty sequence is valid.
    pub async fn get_all_users(&self) -> Result<Vec<User>, ServiceError> {
        let users = self.repo.find_all().await?;
        debug!(count = users.len(), "listed users");
        Ok(users)
    }

    /// Same sequence as [`Self::get_all_users`], sliced to one page.
    pub async fn get_all_users_paginated(&self, opts: Pagination) -> Result<Vec<User>, ServiceError> {
        let users = self.repo.find_all().await?;
        Ok(opts.slice(users))
    }

    pub async fn get_user_by_id(&self, id: Uuid) -> Result<User, ServiceError> {
        let found = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::UserNotFound(id))?;
        debug!(user_id = %found.id, "found user");
        Ok(found)
    }

    /// Persist a new user from the input fields; the store assigns the id.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::audit::TracingAuditSink;
    /// use service::user::domain::CreateUser;
    /// use service::user::repository::mock::MockUserRepository;
    /// use service::user::UserService;
    /// let svc = UserService::new(Arc::new(MockUserRepository::default()), Arc::new(TracingAuditSink));
    /// let input = CreateUser { name: "Alice".into(), email: "alice@example.com".into() };
    /// let created = tokio_test::block_on(svc.create_user(input)).unwrap();
    /// assert_eq!(created.email, "alice@example.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create_user(&self, input: CreateUser) -> Result<User, ServiceError> {
        user::validate_name(&input.name)?;
        user::validate_email(&input.email)?;
        let created = self.repo.create(&input.name, &input.email).await?;
        self.audit.record(&AuditEvent::UserCreated { user_id: created.id });
        info!(user_id = %created.id, "created user");
        Ok(created)
    }

    /// Partial update: fields left `None` retain the stored values. The
    /// target id is always the path id, never anything in the payload.
    #[instrument(skip(self, input), fields(user_id = %id))]
    pub async fn update_user(&self, id: Uuid, input: UpdateUser) -> Result<User, ServiceError> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::UserNotFound(id))?;
        if let Some(name) = &input.name {
            user::validate_name(name)?;
        }
        if let Some(email) = &input.email {
            user::validate_email(email)?;
        }
        let merged = User {
            id,
            name: input.name.unwrap_or(existing.name),
            email: input.email.unwrap_or(existing.email),
        };
        let updated = self.repo.update(merged).await?;
        self.audit.record(&AuditEvent::UserUpdated { user_id: updated.id });
        info!(user_id = %updated.id, "updated user");
        Ok(updated)
    }

    /// Deleting a nonexistent id is a no-op; the store reports whether a
    /// record was removed and the audit event fires only when one was.
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn delete_user(&self, id: Uuid) -> Result<(), ServiceError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            self.audit.record(&AuditEvent::UserDeleted { user_id: id });
            info!(user_id = %id, "deleted user");
        } else {
            debug!(user_id = %id, "delete skipped, no such user");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::user_fixture;

    #[tokio::test]
    async fn create_then_get_round_trips() -> Result<(), anyhow::Error> {
        let fx = user_fixture();
        let created = fx
            .service
            .create_user(CreateUser { name: "Alice".into(), email: "alice@example.com".into() })
            .await?;

        let found = fx.service.get_user_by_id(created.id).await?;
        assert_eq!(found, created);
        assert_eq!(found.name, "Alice");
        assert_eq!(found.email, "alice@example.com");
        Ok(())
    }

    #[tokio::test]
    async fn get_missing_user_is_not_found() {
        let fx = user_fixture();
        let err = fx.service.get_user_by_id(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::UserNotFound(_)));
    }

    #[tokio::test]
    async fn create_rejects_invalid_input_without_persisting() -> Result<(), anyhow::Error> {
        let fx = user_fixture();
        let bad_email = fx
            .service
            .create_user(CreateUser { name: "Alice".into(), email: "alice.example.com".into() })
            .await;
        assert!(matches!(bad_email, Err(ServiceError::Model(_))));

        let blank_name = fx
            .service
            .create_user(CreateUser { name: "  ".into(), email: "a@example.com".into() })
            .await;
        assert!(matches!(blank_name, Err(ServiceError::Model(_))));

        assert!(fx.service.get_all_users().await?.is_empty());
        assert!(fx.audit.events().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_keeps_omitted_fields_and_path_id_wins() -> Result<(), anyhow::Error> {
        let fx = user_fixture();
        let created = fx
            .service
            .create_user(CreateUser { name: "Alice".into(), email: "alice@example.com".into() })
            .await?;

        let renamed = fx
            .service
            .update_user(created.id, UpdateUser { name: Some("Alicia".into()), email: None })
            .await?;
        assert_eq!(renamed.id, created.id);
        assert_eq!(renamed.name, "Alicia");
        assert_eq!(renamed.email, "alice@example.com");

        let readdressed = fx
            .service
            .update_user(created.id, UpdateUser { name: None, email: Some("alicia@example.com".into()) })
            .await?;
        assert_eq!(readdressed.id, created.id);
        assert_eq!(readdressed.name, "Alicia");
        assert_eq!(readdressed.email, "alicia@example.com");
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_user_is_not_found() {
        let fx = user_fixture();
        let id = Uuid::new_v4();
        let err = fx
            .service
            .update_user(id, UpdateUser { name: Some("Ghost".into()), email: None })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::UserNotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn delete_removes_user_and_tolerates_missing_ids() -> Result<(), anyhow::Error> {
        let fx = user_fixture();
        let created = fx
            .service
            .create_user(CreateUser { name: "Alice".into(), email: "alice@example.com".into() })
            .await?;

        fx.service.delete_user(created.id).await?;
        let err = fx.service.get_user_by_id(created.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::UserNotFound(_)));

        // second delete is a no-op and must not audit again
        let audited_before = fx.audit.events().len();
        fx.service.delete_user(created.id).await?;
        assert_eq!(fx.audit.events().len(), audited_before);
        Ok(())
    }

    #[tokio::test]
    async fn list_returns_store_order_and_paginates() -> Result<(), anyhow::Error> {
        let fx = user_fixture();
        let mut ids = Vec::new();
        for i in 0..5 {
            let created = fx
                .service
                .create_user(CreateUser { name: format!("User {i}"), email: format!("u{i}@example.com") })
                .await?;
            ids.push(created.id);
        }

        let all = fx.service.get_all_users().await?;
        let listed: Vec<_> = all.iter().map(|u| u.id).collect();
        assert_eq!(listed, ids);

        let page = fx
            .service
            .get_all_users_paginated(Pagination { page: 2, per_page: 2 })
            .await?;
        let paged: Vec<_> = page.iter().map(|u| u.id).collect();
        assert_eq!(paged, ids[2..4].to_vec());
        Ok(())
    }

    #[tokio::test]
    async fn mutations_audit_exactly_once() -> Result<(), anyhow::Error> {
        let fx = user_fixture();
        let created = fx
            .service
            .create_user(CreateUser { name: "Alice".into(), email: "alice@example.com".into() })
            .await?;
        fx.service
            .update_user(created.id, UpdateUser { name: Some("Alicia".into()), email: None })
            .await?;
        fx.service.delete_user(created.id).await?;

        assert_eq!(
            fx.audit.events(),
            vec![
                AuditEvent::UserCreated { user_id: created.id },
                AuditEvent::UserUpdated { user_id: created.id },
                AuditEvent::UserDeleted { user_id: created.id },
            ]
        );
        Ok(())
    }
}
