use std::fmt::Write as _;

use quill_core::ConstraintSet;
use quill_core::entities::AnalysisResult;
use quill_core::requests::AnalyzeRequest;
use tracing::{info, instrument};

use crate::prompts::{self, fallback};
use crate::{Editor, EditorError};

/// Compose the analysis prompt for a transcript and its constraints.
#[must_use]
pub fn compose_analyze_prompt(chain_text: &str, constraints: &ConstraintSet) -> String {
    let mut prompt = String::with_capacity(prompts::ANALYZE.len() + chain_text.len() + 256);
    prompt.push_str(prompts::ANALYZE);
    prompt.push_str("\n\nUSER CONSTRAINTS:\n");
    let _ = writeln!(prompt, "- Audience: {}", constraints.audience_or(fallback::AUDIENCE));
    let _ = writeln!(prompt, "- Tone: {}", constraints.tone_or(fallback::ANALYZE_TONE));
    let _ = writeln!(prompt, "- Length: {}", constraints.length_or(fallback::LENGTH));
    let _ = writeln!(prompt, "- Platform: {}", constraints.platform_or(fallback::PLATFORM));
    let _ = writeln!(
        prompt,
        "- SEO Keyword: {}",
        constraints.seo_keyword_or(fallback::SEO_KEYWORD)
    );
    prompt.push_str("\nCHAIN TEXT:\n");
    prompt.push_str(chain_text);
    prompt.push('\n');
    prompt
}

impl Editor {
    /// Digest a prompt chain into a claim map and three framing options.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidInput`] before any generator call when the
    /// transcript is blank or longer than the ceiling, or
    /// [`EditorError::Generation`] when generation fails.
    #[instrument(skip_all, fields(chain_chars = request.chain_text.chars().count()))]
    pub async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult, EditorError> {
        request.check()?;
        let prompt = compose_analyze_prompt(&request.chain_text, &request.constraints());
        let analysis = self.client.generate(&prompt, &self.analysis_schema).await?;
        info!(
            claims = analysis.claim_map.len(),
            options = analysis.options.len(),
            "analysis complete"
        );
        Ok(analysis)
    }
}
