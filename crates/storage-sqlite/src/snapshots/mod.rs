//! SQLite storage implementation for the goal snapshot slot.

mod model;
mod repository;

pub use model::AppDataDB;
pub use repository::SnapshotRepository;

// Re-export trait from core for convenience
pub use hacks_core::goals::SnapshotRepositoryTrait;
