//! Coaching service: prompt construction and the infallible insights
//! surface.

use log::error;

use hacks_core::goals::Goal;

use crate::providers::TextGenerator;
use crate::types::GoalInsight;

/// Shown when the provider answers but produces no text.
pub const EMPTY_INSIGHTS_MESSAGE: &str = "Não foi possível gerar insights no momento.";

/// Shown when the provider call fails. Failures are logged, never
/// propagated.
pub const INSIGHTS_ERROR_MESSAGE: &str =
    "Erro ao gerar insights. Verifique sua conexão ou tente mais tarde.";

pub struct CoachService<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> CoachService<G> {
    pub fn new(generator: G) -> Self {
        CoachService { generator }
    }

    /// Produces a short motivational summary of the goal list. This never
    /// fails: provider errors are logged and replaced by a fixed message.
    pub async fn progress_insights(&self, goals: &[Goal]) -> String {
        let prompt = build_prompt(goals);
        match self.generator.generate(&prompt).await {
            Ok(text) if text.trim().is_empty() => EMPTY_INSIGHTS_MESSAGE.to_string(),
            Ok(text) => text,
            Err(e) => {
                error!("Erro ao conectar com o provedor de insights: {}", e);
                INSIGHTS_ERROR_MESSAGE.to_string()
            }
        }
    }
}

fn build_prompt(goals: &[Goal]) -> String {
    let summary: Vec<GoalInsight> = goals.iter().map(GoalInsight::from).collect();
    let summary_json =
        serde_json::to_string_pretty(&summary).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Atue como um coach de produtividade pessoal experiente.\n\
         Analise meus dados de \"Hacks Anuais\" (Metas do Ano) abaixo e forneça um resumo motivacional curto.\n\
         \n\
         Dados das Metas:\n\
         {}\n\
         \n\
         Instruções:\n\
         1. Parabenize pelo progresso na melhor meta.\n\
         2. Identifique a meta que precisa de mais atenção.\n\
         3. Dê 2 dicas práticas e curtas para melhorar a consistência.\n\
         4. Mantenha o tom encorajador e direto. Use emojis.\n\
         5. Responda em Português do Brasil.",
        summary_json
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoachError;
    use async_trait::async_trait;
    use hacks_core::goals::Category;
    use std::sync::Mutex;

    enum MockBehavior {
        Reply(String),
        Fail,
    }

    struct MockGenerator {
        behavior: MockBehavior,
        prompts: Mutex<Vec<String>>,
    }

    impl MockGenerator {
        fn replying(text: &str) -> Self {
            MockGenerator {
                behavior: MockBehavior::Reply(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            MockGenerator {
                behavior: MockBehavior::Fail,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for MockGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, CoachError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.behavior {
                MockBehavior::Reply(text) => Ok(text.clone()),
                MockBehavior::Fail => Err(CoachError::Provider {
                    status: 500,
                    message: "boom".to_string(),
                }),
            }
        }
    }

    fn gym_goal() -> Goal {
        Goal {
            id: "1".to_string(),
            title: "Ir na Academia".to_string(),
            category: Category::Health,
            target: 156.0,
            current: 6.0,
            unit: "treinos".to_string(),
            color: "#8b5cf6".to_string(),
            logs: Vec::new(),
        }
    }

    #[tokio::test]
    async fn prompt_carries_the_goal_summary() {
        let service = CoachService::new(MockGenerator::replying("Parabéns! 🎉"));
        let reply = service.progress_insights(&[gym_goal()]).await;
        assert_eq!(reply, "Parabéns! 🎉");

        let generator = &service.generator;
        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Ir na Academia"));
        assert!(prompts[0].contains("6/156"));
        assert!(prompts[0].contains("3.8%"));
        assert!(prompts[0].contains("Português do Brasil"));
    }

    #[tokio::test]
    async fn provider_failure_becomes_the_fixed_error_message() {
        let service = CoachService::new(MockGenerator::failing());
        let reply = service.progress_insights(&[gym_goal()]).await;
        assert_eq!(reply, INSIGHTS_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn blank_reply_becomes_the_empty_message() {
        let service = CoachService::new(MockGenerator::replying("   "));
        let reply = service.progress_insights(&[gym_goal()]).await;
        assert_eq!(reply, EMPTY_INSIGHTS_MESSAGE);
    }
}
