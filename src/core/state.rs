// Application state (AppState)

use crate::core::config::Config;
use crate::core::startup::seed_demo_users;
use crate::mapping::ShapeMapper;
use crate::models::user::User;
use crate::services::UserService;
use crate::stores::InMemoryStore;
use std::sync::Arc;

pub type UserStore = InMemoryStore<User>;

/// Shared application state
///
/// Everything is wired by constructor injection here; handlers only see
/// the assembled service and mapper.
#[derive(Clone)]
pub struct AppState {
    /// User records
    pub store: Arc<UserStore>,

    /// Mapper shared by the service and the view layer
    pub mapper: Arc<ShapeMapper>,

    /// User operations
    pub users: Arc<UserService<UserStore, ShapeMapper>>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        let store = Arc::new(UserStore::with_capacity(config.store.capacity));
        let mapper = Arc::new(ShapeMapper::new());
        let users = Arc::new(UserService::new(Arc::clone(&store), Arc::clone(&mapper)));

        Self {
            store,
            mapper,
            users,
            config,
        }
    }

    /// Build the state and load the demo directory if configured
    pub fn bootstrap(config: Config) -> Self {
        let state = Self::new(config);
        if state.config.store.seed_demo_users {
            seed_demo_users(&state.store);
        }
        state
    }
}
