use std::sync::Arc;

use userdesk_infra::{default_seed, InMemoryUserStore, UserStore};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppServices {
    users: Arc<dyn UserStore>,
}

impl AppServices {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &dyn UserStore {
        self.users.as_ref()
    }
}

impl std::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppServices").finish_non_exhaustive()
    }
}

/// In-memory wiring; `seed` pre-populates Alice, Bob and Charlie as ids 1..3.
pub fn build_services(seed: bool) -> AppServices {
    let store = if seed {
        InMemoryUserStore::with_seed(default_seed())
    } else {
        InMemoryUserStore::new()
    };
    tracing::debug!(users = store.len(), "user store initialised");
    AppServices::new(Arc::new(store))
}
