//! AI coaching collaborator for Hacks Anuais.
//!
//! Produces a short motivational summary of the user's goals in Brazilian
//! Portuguese by sending a summarized projection of the goal list to a
//! hosted text-generation API. The coach surface is infallible: any
//! provider failure is logged and replaced by a fixed user-facing message.

mod error;
mod providers;
mod service;
mod types;

pub use error::CoachError;
pub use providers::{
    GeminiClient, TextGenerator, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
};
pub use service::{CoachService, EMPTY_INSIGHTS_MESSAGE, INSIGHTS_ERROR_MESSAGE};
pub use types::GoalInsight;
