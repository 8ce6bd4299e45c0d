//! Application state for the HTTP server.

use std::sync::Arc;

use crate::program::ProgramPlanner;
use crate::repository::RegistrationRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Registration store read on every request.
    pub repository: Arc<dyn RegistrationRepository>,
    /// Planner built once from configuration.
    pub planner: Arc<ProgramPlanner>,
}

impl AppState {
    /// Creates application state.
    pub fn new(repository: Arc<dyn RegistrationRepository>, planner: ProgramPlanner) -> Self {
        Self {
            repository,
            planner: Arc::new(planner),
        }
    }
}
