//! Goals module - domain models, snapshot envelope, services, and traits.

mod goals_model;
mod goals_service;
mod goals_traits;
mod snapshot;

pub use goals_model::{parse_amount, Category, Goal, GoalDraft, LogEntry};
pub use goals_service::GoalService;
pub use goals_traits::{GoalServiceTrait, SnapshotRepositoryTrait};
pub use snapshot::{parse_snapshot, seed_goals, GoalsSnapshot};
