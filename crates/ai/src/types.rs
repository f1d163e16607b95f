//! Summarized goal projection sent to the text-generation provider.

use hacks_core::goals::Goal;
use serde::{Deserialize, Serialize};

/// One goal, summarized for the coach prompt: a `current/target` progress
/// string, an unrounded percentage string, and the category label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalInsight {
    pub title: String,
    pub progress: String,
    pub percentage: String,
    pub category: String,
}

impl From<&Goal> for GoalInsight {
    fn from(goal: &Goal) -> Self {
        let ratio = if goal.target > 0.0 {
            goal.current / goal.target * 100.0
        } else {
            0.0
        };
        GoalInsight {
            title: goal.title.clone(),
            progress: format!("{}/{}", goal.current, goal.target),
            percentage: format!("{:.1}%", ratio),
            category: goal.category.to_string(),
        }
    }
}
