use crate::core::error::ServiceError;
use crate::mapping::Mapper;
use crate::models::user::User;
use crate::models::user_model::UserModel;
use crate::stores::EntityStore;
use std::sync::Arc;
use tracing::{debug, info};

/// User operations over an injected store and mapper.
///
/// Holds no state of its own; every call is a single store round-trip.
pub struct UserService<S, M> {
    store: Arc<S>,
    mapper: Arc<M>,
}

impl<S, M> UserService<S, M>
where
    S: EntityStore<User>,
    M: Mapper,
{
    pub fn new(store: Arc<S>, mapper: Arc<M>) -> Self {
        Self { store, mapper }
    }

    /// Users whose active flag equals `is_active`, in store order
    pub fn filter_by_active(&self, is_active: bool) -> Result<Vec<UserModel>, ServiceError> {
        let users: Vec<UserModel> = self
            .store
            .get_all()
            .iter()
            .filter(|user| user.is_active == is_active)
            .map(|user| self.mapper.map::<User, UserModel>(user))
            .collect::<Result<_, _>>()?;

        debug!(is_active, count = users.len(), "Filtered users by active state");
        Ok(users)
    }

    pub fn get_all(&self) -> Result<Vec<UserModel>, ServiceError> {
        let users: Vec<UserModel> = self
            .store
            .get_all()
            .iter()
            .map(|user| self.mapper.map::<User, UserModel>(user))
            .collect::<Result<_, _>>()?;

        debug!(count = users.len(), "Fetched all users");
        Ok(users)
    }

    /// Returns `Ok(None)` when no user has this id
    pub fn get_by_id(&self, id: i64) -> Result<Option<UserModel>, ServiceError> {
        match self.store.get_by_id(id) {
            Some(user) => Ok(Some(self.mapper.map(&user)?)),
            None => {
                debug!(user_id = id, "User not found");
                Ok(None)
            }
        }
    }

    /// Insert a new user; the returned model carries the assigned id
    pub fn create(&self, user: &UserModel) -> Result<UserModel, ServiceError> {
        let entity: User = self.mapper.map(user)?;
        let created = self.store.create(entity);

        info!(user_id = created.id, email = %created.email, "User created");
        Ok(self.mapper.map(&created)?)
    }

    /// Overwrite an existing user.
    /// Fails with `StoreError::NotFound` if no user has `user.id`.
    pub fn update(&self, user: &UserModel) -> Result<UserModel, ServiceError> {
        let entity: User = self.mapper.map(user)?;
        let updated = self.store.update(entity)?;

        info!(user_id = updated.id, "User updated");
        Ok(self.mapper.map(&updated)?)
    }

    /// Returns false if no user has this id
    pub fn delete(&self, id: i64) -> bool {
        let Some(user) = self.store.get_by_id(id) else {
            debug!(user_id = id, "User not found, nothing to delete");
            return false;
        };

        let removed = self.store.delete(&user);
        if removed {
            info!(user_id = id, "User deleted");
        }
        removed
    }
}
