//! Goals domain models.

use chrono::Utc;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::{Result, ValidationError};

/// Goal category. Serialized with the Portuguese labels the snapshot format
/// has always used, so payloads written by older clients keep loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Saúde")]
    Health,
    #[serde(rename = "Financeiro")]
    Financial,
    #[serde(rename = "Estudos")]
    Studies,
    #[serde(rename = "Outro")]
    Other,
}

impl Category {
    /// Fixed color palette for this category. `Other` doubles as the
    /// fallback palette.
    pub fn palette(&self) -> &'static [&'static str] {
        match self {
            Category::Health => &["#ef4444", "#f97316", "#8b5cf6", "#ec4899"],
            Category::Financial => &["#10b981", "#059669", "#34d399"],
            Category::Studies => &["#3b82f6", "#6366f1", "#8b5cf6"],
            Category::Other => &["#64748b", "#94a3b8"],
        }
    }

    /// Picks a color uniformly at random from this category's palette.
    pub fn random_color(&self) -> String {
        let palette = self.palette();
        let mut rng = rand::thread_rng();
        palette
            .choose(&mut rng)
            .copied()
            .unwrap_or("#64748b")
            .to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Health => "Saúde",
            Category::Financial => "Financeiro",
            Category::Studies => "Estudos",
            Category::Other => "Outro",
        };
        write!(f, "{}", label)
    }
}

/// One progress event. `value` is the amount attributed to the event;
/// absent means a single habit tick worth 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    /// Event time in epoch milliseconds.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl LogEntry {
    pub fn now(value: f64) -> Self {
        LogEntry {
            id: Uuid::now_v7().to_string(),
            timestamp: Utc::now().timestamp_millis(),
            value: Some(value),
        }
    }

    /// The amount this event contributes to the goal's total.
    pub fn amount(&self) -> f64 {
        self.value.unwrap_or(1.0)
    }
}

/// Domain model representing a tracked annual goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub category: Category,
    /// Annual target value, fixed at creation.
    pub target: f64,
    /// Cumulative progress. Never clamped above `target`; over-achievement
    /// is legitimate and only display percentages clamp.
    pub current: f64,
    /// Display unit, e.g. "treinos", "livros", "R$".
    pub unit: String,
    /// Hex color assigned at creation, immutable thereafter.
    pub color: String,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

impl Goal {
    /// Builds a new goal from a validated draft: zero progress, empty log,
    /// fresh id, random palette color.
    pub fn from_draft(draft: GoalDraft) -> Self {
        let color = draft.category.random_color();
        Goal {
            id: Uuid::now_v7().to_string(),
            title: draft.title,
            category: draft.category,
            target: draft.target,
            current: 0.0,
            unit: draft.unit,
            color,
            logs: Vec::new(),
        }
    }

    /// Whether this goal uses the financial presentation mode
    /// (currency formatting, free-form amount entry).
    pub fn is_financial(&self) -> bool {
        self.unit == "R$" || self.category == Category::Financial
    }
}

/// Input model for creating a new goal.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalDraft {
    pub title: String,
    pub category: Category,
    pub target: f64,
    pub unit: String,
}

impl GoalDraft {
    /// Validates the draft: a title is required and the target must be a
    /// finite number of at least 1.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title".to_string()).into());
        }
        if !self.target.is_finite() || self.target < 1.0 {
            return Err(ValidationError::InvalidInput(format!(
                "target must be at least 1, got {}",
                self.target
            ))
            .into());
        }
        Ok(())
    }
}

/// Parses a progress amount from locale-formatted text.
///
/// Accepts a comma as the decimal separator ("4,5", "62.453,36") as well as
/// plain decimal notation. The amount must be a positive finite number.
pub fn parse_amount(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("amount".to_string()).into());
    }
    let normalized = if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.to_string()
    };
    let value: f64 = normalized
        .parse()
        .map_err(|_| ValidationError::NumberParse(trimmed.to_string()))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidInput(format!(
            "amount must be a positive number, got {}",
            trimmed
        ))
        .into());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_color_comes_from_category_palette() {
        for category in [
            Category::Health,
            Category::Financial,
            Category::Studies,
            Category::Other,
        ] {
            let color = category.random_color();
            assert!(category.palette().contains(&color.as_str()));
        }
    }

    #[test]
    fn category_round_trips_portuguese_labels() {
        let json = serde_json::to_string(&Category::Health).unwrap();
        assert_eq!(json, "\"Saúde\"");
        let parsed: Category = serde_json::from_str("\"Financeiro\"").unwrap();
        assert_eq!(parsed, Category::Financial);
    }

    #[test]
    fn financial_mode_from_unit_or_category() {
        let draft = GoalDraft {
            title: "100K".to_string(),
            category: Category::Other,
            target: 100_000.0,
            unit: "R$".to_string(),
        };
        assert!(Goal::from_draft(draft).is_financial());

        let draft = GoalDraft {
            title: "Investir".to_string(),
            category: Category::Financial,
            target: 1_000.0,
            unit: "aportes".to_string(),
        };
        assert!(Goal::from_draft(draft).is_financial());

        let draft = GoalDraft {
            title: "Ler Livros".to_string(),
            category: Category::Studies,
            target: 12.0,
            unit: "livros".to_string(),
        };
        assert!(!Goal::from_draft(draft).is_financial());
    }

    #[test]
    fn draft_validation_rejects_bad_input() {
        let mut draft = GoalDraft {
            title: "  ".to_string(),
            category: Category::Health,
            target: 10.0,
            unit: "vezes".to_string(),
        };
        assert!(draft.validate().is_err());

        draft.title = "Academia".to_string();
        draft.target = 0.0;
        assert!(draft.validate().is_err());

        draft.target = 156.0;
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn parse_amount_accepts_comma_decimal() {
        assert_eq!(parse_amount("500").unwrap(), 500.0);
        assert_eq!(parse_amount("4,5").unwrap(), 4.5);
        assert_eq!(parse_amount("62.453,36").unwrap(), 62453.36);
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("-10").is_err());
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn log_entry_amount_defaults_to_one() {
        let entry = LogEntry {
            id: "x".to_string(),
            timestamp: 0,
            value: None,
        };
        assert_eq!(entry.amount(), 1.0);
        assert_eq!(LogEntry::now(500.0).amount(), 500.0);
    }
}
