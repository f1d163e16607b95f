use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalDraft};
use async_trait::async_trait;

/// Trait for the persisted snapshot slot.
///
/// The slot holds one opaque string payload (the serialized goal list
/// envelope); the goal service owns serialization and migration.
#[async_trait]
pub trait SnapshotRepositoryTrait: Send + Sync {
    /// Reads the payload, or `None` when nothing has been persisted yet.
    fn load_raw(&self) -> Result<Option<String>>;
    /// Replaces the payload wholesale.
    async fn save_raw(&self, payload: String) -> Result<()>;
}

/// Trait for goal store operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    /// The canonical ordered goal list.
    fn get_goals(&self) -> Result<Vec<Goal>>;

    /// Looks up a single goal by id.
    fn get_goal(&self, goal_id: &str) -> Result<Option<Goal>>;

    /// Creates a goal from a draft and appends it to the end of the list.
    async fn create_goal(&self, draft: GoalDraft) -> Result<Goal>;

    /// Adds a single habit tick. Unknown ids are a silent no-op.
    async fn increment(&self, goal_id: &str) -> Result<Vec<Goal>>;

    /// Undoes the most recent progress event. No-op when the goal is
    /// unknown or already at zero.
    async fn decrement(&self, goal_id: &str) -> Result<Vec<Goal>>;

    /// Adds a specific positive amount. Unknown ids are a silent no-op.
    async fn add_value(&self, goal_id: &str, amount: f64) -> Result<Vec<Goal>>;

    /// Moves the goal at `from` to position `to`, preserving all other
    /// relative order.
    async fn reorder(&self, from: usize, to: usize) -> Result<Vec<Goal>>;
}
