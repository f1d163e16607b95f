//! Versioned snapshot envelope for the persisted goal list.
//!
//! The whole goal list is persisted wholesale as one JSON payload. The
//! payload carries an explicit schema version so shape changes migrate in
//! place instead of requiring a new storage key. Legacy payloads written as
//! a bare goal array (the shape the original dashboard stored) are still
//! accepted and wrapped on the next save.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::SNAPSHOT_SCHEMA_VERSION;
use crate::errors::{Error, Result};
use crate::goals::goals_model::{Category, Goal};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalsSnapshot {
    pub schema_version: u32,
    pub goals: Vec<Goal>,
}

impl GoalsSnapshot {
    pub fn new(goals: Vec<Goal>) -> Self {
        GoalsSnapshot {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            goals,
        }
    }

    pub fn to_payload(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Parses a persisted payload into a goal list, migrating legacy shapes.
pub fn parse_snapshot(raw: &str) -> Result<Vec<Goal>> {
    let value: Value = serde_json::from_str(raw)?;

    // Legacy shape: bare array of goals, no envelope.
    if value.is_array() {
        return Ok(serde_json::from_value(value)?);
    }
    if !value.is_object() {
        return Err(Error::Snapshot(
            "payload is neither array nor object".to_string(),
        ));
    }

    let version = value
        .get("schemaVersion")
        .and_then(Value::as_u64)
        .ok_or_else(|| Error::Snapshot("missing schemaVersion".to_string()))?;
    if version as u32 > SNAPSHOT_SCHEMA_VERSION {
        return Err(Error::Snapshot(format!(
            "unsupported schema version {}",
            version
        )));
    }

    let snapshot: GoalsSnapshot = serde_json::from_value(value)?;
    Ok(snapshot.goals)
}

/// The five example goals shown on first launch, before the user has saved
/// anything. Progress values predate event logging, which is why they carry
/// a nonzero `current` with an empty log.
pub fn seed_goals() -> Vec<Goal> {
    vec![
        Goal {
            id: "1".to_string(),
            title: "Ir na Academia".to_string(),
            category: Category::Health,
            target: 156.0,
            current: 6.0,
            unit: "treinos".to_string(),
            color: "#8b5cf6".to_string(),
            logs: Vec::new(),
        },
        Goal {
            id: "2".to_string(),
            title: "Cardio".to_string(),
            category: Category::Health,
            target: 156.0,
            current: 4.0,
            unit: "sessões".to_string(),
            color: "#f97316".to_string(),
            logs: Vec::new(),
        },
        Goal {
            id: "3".to_string(),
            title: "Beber Água (2L)".to_string(),
            category: Category::Health,
            target: 365.0,
            current: 12.0,
            unit: "dias".to_string(),
            color: "#3b82f6".to_string(),
            logs: Vec::new(),
        },
        Goal {
            id: "4".to_string(),
            title: "Ler Livros".to_string(),
            category: Category::Studies,
            target: 12.0,
            current: 1.0,
            unit: "livros".to_string(),
            color: "#10b981".to_string(),
            logs: Vec::new(),
        },
        Goal {
            id: "5".to_string(),
            title: "100K".to_string(),
            category: Category::Financial,
            target: 100_000.0,
            current: 62_453.36,
            unit: "R$".to_string(),
            color: "#059669".to_string(),
            logs: Vec::new(),
        },
    ]
}
