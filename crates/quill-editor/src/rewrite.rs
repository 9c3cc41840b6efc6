use quill_core::entities::RewriteResult;
use quill_core::requests::RewriteRequest;
use tracing::{info, instrument, warn};

use crate::placeholders::source_placeholders;
use crate::prompts;
use crate::{Editor, EditorError};

/// Compose the rewrite prompt for an article and an instruction.
#[must_use]
pub fn compose_rewrite_prompt(article_markdown: &str, instruction: &str) -> String {
    format!(
        "{}\n\nINSTRUCTION: {}\n\nCURRENT ARTICLE:\n{}\n",
        prompts::REWRITE,
        instruction.trim(),
        article_markdown
    )
}

impl Editor {
    /// Rewrite an article body according to a free-text instruction.
    ///
    /// The result replaces the whole body. Placeholders dropped by the
    /// generator are logged, not restored.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidInput`] before any generator call when
    /// either field is blank, or [`EditorError::Generation`] when generation
    /// fails.
    #[instrument(skip_all, fields(article_chars = request.article_markdown.len()))]
    pub async fn rewrite(&self, request: &RewriteRequest) -> Result<RewriteResult, EditorError> {
        request.check()?;
        let prompt = compose_rewrite_prompt(&request.article_markdown, &request.instruction);
        let rewrite = self.client.generate(&prompt, &self.rewrite_schema).await?;

        let kept = source_placeholders(&rewrite.article_markdown);
        let dropped = source_placeholders(&request.article_markdown)
            .into_iter()
            .filter(|query| !kept.contains(query))
            .count();
        if dropped > 0 {
            warn!(dropped, "rewrite removed source placeholders");
        }
        info!(chars = rewrite.article_markdown.len(), "rewrite complete");
        Ok(rewrite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_instruction_and_article() {
        let prompt = compose_rewrite_prompt("## Body\ntext", "  Make it punchier ");
        assert!(prompt.starts_with(prompts::REWRITE));
        assert!(prompt.contains("INSTRUCTION: Make it punchier\n"));
        assert!(prompt.ends_with("CURRENT ARTICLE:\n## Body\ntext\n"));
    }
}
