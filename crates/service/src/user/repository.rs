use async_trait::async_trait;
use uuid::Uuid;

use models::user::User;

use crate::errors::ServiceError;

/// Repository abstraction for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in the store's natural order.
    async fn find_all(&self) -> Result<Vec<User>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ServiceError>;
    /// Persist a new user; the store assigns the id.
    async fn create(&self, name: &str, email: &str) -> Result<User, ServiceError>;
    async fn update(&self, user: User) -> Result<User, ServiceError>;
    /// True when a record was actually removed.
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use std::sync::Mutex;

    use super::*;

    /// Keeps users in insertion order, which doubles as the store's
    /// natural order for `find_all`.
    #[derive(Default)]
    pub struct MockUserRepository {
        users: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_all(&self) -> Result<Vec<User>, ServiceError> {
            Ok(self.users.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ServiceError> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| u.id == id).cloned())
        }

        async fn create(&self, name: &str, email: &str) -> Result<User, ServiceError> {
            let user = User {
                id: Uuid::new_v4(),
                name: name.to_string(),
                email: email.to_string(),
            };
            self.users.lock().unwrap().push(user.clone());
            Ok(user)
        }

        async fn update(&self, user: User) -> Result<User, ServiceError> {
            let mut users = self.users.lock().unwrap();
            match users.iter_mut().find(|u| u.id == user.id) {
                Some(slot) => {
                    *slot = user.clone();
                    Ok(user)
                }
                None => Err(ServiceError::UserNotFound(user.id)),
            }
        }

        async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut users = self.users.lock().unwrap();
            let before = users.len();
            users.retain(|u| u.id != id);
            Ok(users.len() < before)
        }
    }
}
