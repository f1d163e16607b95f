use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use log::{debug, warn};

use crate::errors::{Result, ValidationError};
use crate::goals::goals_model::{Goal, GoalDraft, LogEntry};
use crate::goals::goals_traits::{GoalServiceTrait, SnapshotRepositoryTrait};
use crate::goals::snapshot::{parse_snapshot, seed_goals, GoalsSnapshot};

/// The goal store: owns the canonical ordered goal list and is the sole
/// writer of persisted state. Every mutation re-serializes the whole list
/// to the snapshot slot.
pub struct GoalService {
    repository: Arc<dyn SnapshotRepositoryTrait>,
    goals: RwLock<Vec<Goal>>,
}

impl GoalService {
    pub fn new(repository: Arc<dyn SnapshotRepositoryTrait>) -> Self {
        GoalService {
            repository,
            goals: RwLock::new(Vec::new()),
        }
    }

    /// Loads the persisted snapshot, falling back to the seed goals when no
    /// snapshot exists or the payload cannot be read. The resulting list is
    /// persisted right away so legacy payloads are rewritten in the current
    /// envelope.
    pub async fn initialize(&self) -> Result<()> {
        let goals = match self.repository.load_raw()? {
            Some(raw) => match parse_snapshot(&raw) {
                Ok(goals) => goals,
                Err(e) => {
                    warn!("Discarding unreadable goal snapshot, reseeding: {}", e);
                    seed_goals()
                }
            },
            None => {
                debug!("No goal snapshot found, seeding example goals");
                seed_goals()
            }
        };
        {
            let mut guard = self.goals.write().unwrap();
            *guard = goals;
        }
        self.persist().await
    }

    async fn persist(&self) -> Result<()> {
        let snapshot = {
            let guard = self.goals.read().unwrap();
            GoalsSnapshot::new(guard.clone())
        };
        self.repository.save_raw(snapshot.to_payload()?).await
    }

    fn current_list(&self) -> Vec<Goal> {
        self.goals.read().unwrap().clone()
    }

    /// Applies `apply` to the goal with the given id. `apply` reports
    /// whether it mutated the goal; unknown ids leave the list untouched
    /// and read as not mutated.
    fn with_goal<F>(&self, goal_id: &str, apply: F) -> bool
    where
        F: FnOnce(&mut Goal) -> bool,
    {
        let mut guard = self.goals.write().unwrap();
        match guard.iter_mut().find(|g| g.id == goal_id) {
            Some(goal) => apply(goal),
            None => false,
        }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.current_list())
    }

    fn get_goal(&self, goal_id: &str) -> Result<Option<Goal>> {
        let guard = self.goals.read().unwrap();
        Ok(guard.iter().find(|g| g.id == goal_id).cloned())
    }

    async fn create_goal(&self, draft: GoalDraft) -> Result<Goal> {
        draft.validate()?;
        let goal = Goal::from_draft(draft);
        {
            let mut guard = self.goals.write().unwrap();
            guard.push(goal.clone());
        }
        self.persist().await?;
        Ok(goal)
    }

    async fn increment(&self, goal_id: &str) -> Result<Vec<Goal>> {
        let changed = self.with_goal(goal_id, |goal| {
            goal.current += 1.0;
            goal.logs.push(LogEntry::now(1.0));
            true
        });
        if changed {
            self.persist().await?;
        } else {
            debug!("increment: no goal with id {}", goal_id);
        }
        Ok(self.current_list())
    }

    async fn decrement(&self, goal_id: &str) -> Result<Vec<Goal>> {
        let changed = self.with_goal(goal_id, |goal| {
            if goal.current <= 0.0 {
                return false;
            }
            // Undo the most recent event: subtract its amount (a plain tick
            // when the log predates value tracking) and drop the entry.
            let delta = goal.logs.last().map(LogEntry::amount).unwrap_or(1.0);
            goal.current = (goal.current - delta).max(0.0);
            goal.logs.pop();
            true
        });
        if changed {
            self.persist().await?;
        } else {
            debug!("decrement: no goal with id {}", goal_id);
        }
        Ok(self.current_list())
    }

    async fn add_value(&self, goal_id: &str, amount: f64) -> Result<Vec<Goal>> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidInput(format!(
                "amount must be a positive number, got {}",
                amount
            ))
            .into());
        }
        let changed = self.with_goal(goal_id, |goal| {
            goal.current += amount;
            goal.logs.push(LogEntry::now(amount));
            true
        });
        if changed {
            self.persist().await?;
        } else {
            debug!("add_value: no goal with id {}", goal_id);
        }
        Ok(self.current_list())
    }

    async fn reorder(&self, from: usize, to: usize) -> Result<Vec<Goal>> {
        if from == to {
            return Ok(self.current_list());
        }
        {
            let mut guard = self.goals.write().unwrap();
            let len = guard.len();
            if from >= len || to >= len {
                return Err(ValidationError::IndexOutOfBounds(format!(
                    "reorder {} -> {} on {} goals",
                    from, to, len
                ))
                .into());
            }
            let goal = guard.remove(from);
            guard.insert(to, goal);
        }
        self.persist().await?;
        Ok(self.current_list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::goals_model::Category;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::RwLock as StdRwLock;

    // ============== Mock repository ==============

    struct MockSnapshotRepository {
        slot: StdRwLock<Option<String>>,
        saves: AtomicUsize,
    }

    impl MockSnapshotRepository {
        fn empty() -> Self {
            Self {
                slot: StdRwLock::new(None),
                saves: AtomicUsize::new(0),
            }
        }

        fn with_payload(payload: &str) -> Self {
            Self {
                slot: StdRwLock::new(Some(payload.to_string())),
                saves: AtomicUsize::new(0),
            }
        }

        fn save_count(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SnapshotRepositoryTrait for MockSnapshotRepository {
        fn load_raw(&self) -> Result<Option<String>> {
            Ok(self.slot.read().unwrap().clone())
        }

        async fn save_raw(&self, payload: String) -> Result<()> {
            *self.slot.write().unwrap() = Some(payload);
            self.saves.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    async fn service_with_goals(goals: Vec<Goal>) -> GoalService {
        let payload = GoalsSnapshot::new(goals).to_payload().unwrap();
        let repo = Arc::new(MockSnapshotRepository::with_payload(&payload));
        let service = GoalService::new(repo);
        service.initialize().await.unwrap();
        service
    }

    fn gym_goal() -> Goal {
        Goal {
            id: "g1".to_string(),
            title: "Ir na Academia".to_string(),
            category: Category::Health,
            target: 156.0,
            current: 6.0,
            unit: "treinos".to_string(),
            color: "#8b5cf6".to_string(),
            logs: Vec::new(),
        }
    }

    fn savings_goal() -> Goal {
        Goal {
            id: "g2".to_string(),
            title: "100K".to_string(),
            category: Category::Financial,
            target: 100_000.0,
            current: 62_453.36,
            unit: "R$".to_string(),
            color: "#059669".to_string(),
            logs: Vec::new(),
        }
    }

    #[tokio::test]
    async fn initialize_seeds_when_slot_is_empty() {
        let repo = Arc::new(MockSnapshotRepository::empty());
        let service = GoalService::new(repo.clone());
        service.initialize().await.unwrap();

        let goals = service.get_goals().unwrap();
        assert_eq!(goals, seed_goals());
        // The seed list is persisted immediately.
        assert!(repo.load_raw().unwrap().is_some());
    }

    #[tokio::test]
    async fn initialize_falls_back_to_seeds_on_corrupt_payload() {
        let repo = Arc::new(MockSnapshotRepository::with_payload("{corrupt"));
        let service = GoalService::new(repo.clone());
        service.initialize().await.unwrap();

        assert_eq!(service.get_goals().unwrap(), seed_goals());
        // The slot now holds a readable snapshot again.
        let raw = repo.load_raw().unwrap().unwrap();
        assert_eq!(parse_snapshot(&raw).unwrap(), seed_goals());
    }

    #[tokio::test]
    async fn increment_appends_a_unit_log() {
        let service = service_with_goals(vec![gym_goal()]).await;
        let goals = service.increment("g1").await.unwrap();

        assert_eq!(goals[0].current, 7.0);
        assert_eq!(goals[0].logs.len(), 1);
        assert_eq!(goals[0].logs[0].value, Some(1.0));
    }

    #[tokio::test]
    async fn increment_then_decrement_is_an_exact_inverse() {
        let service = service_with_goals(vec![gym_goal()]).await;
        let before = service.get_goals().unwrap();

        service.increment("g1").await.unwrap();
        let after = service.decrement("g1").await.unwrap();

        assert_eq!(after[0].current, before[0].current);
        assert_eq!(after[0].logs, before[0].logs);
    }

    #[tokio::test]
    async fn add_value_then_decrement_removes_exactly_that_amount() {
        let service = service_with_goals(vec![savings_goal()]).await;

        let goals = service.add_value("g2", 500.0).await.unwrap();
        assert_eq!(goals[0].current, 62_953.36);
        assert_eq!(goals[0].logs.last().unwrap().value, Some(500.0));

        let goals = service.decrement("g2").await.unwrap();
        assert_eq!(goals[0].current, 62_453.36);
        assert!(goals[0].logs.is_empty());
    }

    #[tokio::test]
    async fn decrement_at_zero_is_a_no_op() {
        let mut goal = gym_goal();
        goal.current = 0.0;
        let service = service_with_goals(vec![goal]).await;

        let goals = service.decrement("g1").await.unwrap();
        assert_eq!(goals[0].current, 0.0);
        assert!(goals[0].logs.is_empty());
    }

    #[tokio::test]
    async fn decrement_without_logs_subtracts_a_single_tick() {
        // Seed-era progress has no log entries to pop.
        let service = service_with_goals(vec![gym_goal()]).await;
        let goals = service.decrement("g1").await.unwrap();
        assert_eq!(goals[0].current, 5.0);
        assert!(goals[0].logs.is_empty());
    }

    #[tokio::test]
    async fn decrement_clamps_at_zero() {
        let mut goal = gym_goal();
        goal.current = 0.5;
        goal.logs.push(LogEntry {
            id: "l1".to_string(),
            timestamp: 0,
            value: Some(2.0),
        });
        let service = service_with_goals(vec![goal]).await;

        let goals = service.decrement("g1").await.unwrap();
        assert_eq!(goals[0].current, 0.0);
        assert!(goals[0].logs.is_empty());
    }

    #[tokio::test]
    async fn mutations_on_unknown_ids_are_silent_no_ops() {
        let service = service_with_goals(vec![gym_goal()]).await;
        let before = service.get_goals().unwrap();

        assert_eq!(service.increment("nope").await.unwrap(), before);
        assert_eq!(service.decrement("nope").await.unwrap(), before);
        assert_eq!(service.add_value("nope", 5.0).await.unwrap(), before);
    }

    #[tokio::test]
    async fn add_value_rejects_non_positive_amounts() {
        let service = service_with_goals(vec![savings_goal()]).await;
        assert!(service.add_value("g2", 0.0).await.is_err());
        assert!(service.add_value("g2", -1.0).await.is_err());
        assert!(service.add_value("g2", f64::NAN).await.is_err());
    }

    #[tokio::test]
    async fn create_goal_starts_at_zero_with_a_palette_color() {
        let service = service_with_goals(Vec::new()).await;
        let draft = GoalDraft {
            title: "Meditar".to_string(),
            category: Category::Health,
            target: 200.0,
            unit: "sessões".to_string(),
        };
        let goal = service.create_goal(draft).await.unwrap();

        assert_eq!(goal.current, 0.0);
        assert!(goal.logs.is_empty());
        assert!(Category::Health.palette().contains(&goal.color.as_str()));

        // Appended at the end of the list.
        let goals = service.get_goals().unwrap();
        assert_eq!(goals.last().unwrap().id, goal.id);
    }

    #[tokio::test]
    async fn create_goal_rejects_invalid_drafts() {
        let service = service_with_goals(Vec::new()).await;
        let draft = GoalDraft {
            title: String::new(),
            category: Category::Other,
            target: 10.0,
            unit: "vezes".to_string(),
        };
        assert!(service.create_goal(draft).await.is_err());
    }

    #[tokio::test]
    async fn reorder_moves_one_goal_and_preserves_the_rest() {
        let service = service_with_goals(seed_goals()).await;
        let goals = service.reorder(0, 3).await.unwrap();
        let ids: Vec<&str> = goals.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, ["2", "3", "4", "1", "5"]);

        // Reordering back restores the original order.
        let goals = service.reorder(3, 0).await.unwrap();
        let ids: Vec<&str> = goals.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[tokio::test]
    async fn reorder_rejects_out_of_range_indices() {
        let service = service_with_goals(seed_goals()).await;
        assert!(service.reorder(0, 9).await.is_err());
        assert!(service.reorder(9, 0).await.is_err());
        // Equal indices are a no-op, not an error.
        assert!(service.reorder(2, 2).await.is_ok());
    }

    #[tokio::test]
    async fn no_op_mutations_skip_the_snapshot_write() {
        let mut goal = gym_goal();
        goal.current = 0.0;
        let payload = GoalsSnapshot::new(vec![goal]).to_payload().unwrap();
        let repo = Arc::new(MockSnapshotRepository::with_payload(&payload));
        let service = GoalService::new(repo.clone());
        service.initialize().await.unwrap();
        let saves_after_init = repo.save_count();

        // Decrement at zero and mutations on unknown ids change nothing,
        // so nothing gets persisted either.
        service.decrement("g1").await.unwrap();
        service.increment("nope").await.unwrap();
        service.add_value("nope", 5.0).await.unwrap();
        assert_eq!(repo.save_count(), saves_after_init);

        service.increment("g1").await.unwrap();
        assert_eq!(repo.save_count(), saves_after_init + 1);
    }

    #[tokio::test]
    async fn every_mutation_rewrites_the_snapshot() {
        let repo = Arc::new(MockSnapshotRepository::empty());
        let service = GoalService::new(repo.clone());
        service.initialize().await.unwrap();

        service.increment("1").await.unwrap();
        let raw = repo.load_raw().unwrap().unwrap();
        let persisted = parse_snapshot(&raw).unwrap();
        assert_eq!(persisted[0].current, 7.0);
        assert_eq!(persisted[0].logs.len(), 1);
    }
}
