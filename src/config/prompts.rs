//! Prompt templates for grounded answer generation.
//!
//! Prompts can be customized by placing TOML files in the custom prompts
//! directory. Templates carry two slots, `{{context}}` and `{{question}}`;
//! rendering is by explicit [`PromptSlots`] rather than free-form variables,
//! so everything the generation step sees is enumerable.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Prompts {
    pub advisor: AdvisorPrompts,
}

/// The typed slots available to advisor prompt templates.
///
/// This is the complete set of dynamic content that reaches the generation
/// step: the grounded context assembled from retrieved segments, and the
/// user's question. Nothing else is interpolated.
#[derive(Debug, Clone, Copy)]
pub struct PromptSlots<'a> {
    /// Grounded context: retrieved segments with titles and timestamps.
    pub context: &'a str,
    /// The user's question, verbatim.
    pub question: &'a str,
}

/// Prompts for grounded answer generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorPrompts {
    pub system: String,
    pub user: String,
}

impl Default for AdvisorPrompts {
    fn default() -> Self {
        Self {
            system: r#"You are a video-production advisor. You answer questions using ONLY the transcript excerpts provided in each request.

Rules:
- Base every statement on the provided excerpts; never draw on outside knowledge
- Cite every factual claim inline using this exact format: [source: "Video Title" t=HH:MM:SS]
- Use only the titles and timestamps that appear in the provided excerpts
- If the excerpts cannot support a claim, say so plainly instead of making it
- Be specific and practical; avoid generic advice"#
                .to_string(),

            user: r#"TRANSCRIPT CONTEXT:

{{context}}

USER QUESTION: {{question}}

INSTRUCTIONS:
1. Provide actionable recommendations based only on the transcript context above
2. Attach a citation to each recommendation: [source: "Video Title" t=HH:MM:SS]
3. If the context doesn't contain enough information, say so clearly
4. Group related recommendations together
5. Reference the video sources by name when giving advice

ANSWER:"#
                .to_string(),
        }
    }
}

impl AdvisorPrompts {
    /// Render the user template with the given slots.
    pub fn render_user(&self, slots: &PromptSlots) -> String {
        render(&self.user, slots)
    }
}

/// Substitute the typed slots into a template.
fn render(template: &str, slots: &PromptSlots) -> String {
    template
        .replace("{{context}}", slots.context)
        .replace("{{question}}", slots.question)
}

impl Prompts {
    /// Load prompts, applying overrides from the custom directory if set.
    pub fn load(custom_dir: Option<&str>) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(dir) = custom_dir {
            let custom_path = PathBuf::from(shellexpand::tilde(dir).to_string());

            let advisor_path = custom_path.join("advisor.toml");
            if advisor_path.exists() {
                let content = std::fs::read_to_string(&advisor_path)?;
                prompts.advisor = toml::from_str(&content)?;
            }
        }

        Ok(prompts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompts_nonempty() {
        let prompts = Prompts::default();
        assert!(!prompts.advisor.system.is_empty());
        assert!(prompts.advisor.user.contains("{{context}}"));
        assert!(prompts.advisor.user.contains("{{question}}"));
    }

    #[test]
    fn test_render_user_fills_slots() {
        let prompts = AdvisorPrompts::default();
        let rendered = prompts.render_user(&PromptSlots {
            context: "Video: Test @ 00:00:05\nContent: hello",
            question: "What is covered?",
        });

        assert!(rendered.contains("Video: Test @ 00:00:05"));
        assert!(rendered.contains("USER QUESTION: What is covered?"));
        assert!(!rendered.contains("{{context}}"));
        assert!(!rendered.contains("{{question}}"));
    }

    #[test]
    fn test_system_prompt_pins_citation_format() {
        let prompts = AdvisorPrompts::default();
        assert!(prompts.system.contains(r#"[source: "Video Title" t=HH:MM:SS]"#));
    }
}
