use std::fmt::Write as _;

use quill_core::ConstraintSet;
use quill_core::entities::DraftResult;
use quill_core::enums::AngleKind;
use quill_core::requests::DraftRequest;
use tracing::{debug, info, instrument};

use crate::placeholders::source_placeholders;
use crate::prompts::{self, fallback};
use crate::{DraftSettings, Editor, EditorError};

/// Compose the drafting prompt for a transcript, a selected option and constraints.
///
/// The option id is passed through as given. A conventional id also carries a
/// one-line description of its angle.
#[must_use]
pub fn compose_draft_prompt(
    chain_text: &str,
    option_id: &str,
    constraints: &ConstraintSet,
    settings: DraftSettings,
) -> String {
    let option_id = option_id.trim();
    let mut prompt = String::with_capacity(prompts::DRAFT.len() + chain_text.len() + 384);
    prompt.push_str(prompts::DRAFT);

    let _ = write!(
        prompt,
        "\n\nOPTION SELECTED: {option_id} (write the '{option_id}' framing of this chain)"
    );
    if let Some(kind) = AngleKind::from_id(option_id) {
        let _ = write!(prompt, "\nAngle: {}", kind.description());
    }

    prompt.push_str("\n\nUSER CONSTRAINTS:\n");
    let _ = writeln!(prompt, "- Audience: {}", constraints.audience_or(fallback::AUDIENCE));
    let _ = writeln!(prompt, "- Tone: {}", constraints.tone_or(fallback::DRAFT_TONE));
    if settings.include_length {
        let _ = writeln!(prompt, "- Length: {}", constraints.length_or(fallback::LENGTH));
    }
    let _ = writeln!(prompt, "- Platform: {}", constraints.platform_or(fallback::PLATFORM));
    prompt.push_str("\nCHAIN TEXT:\n");
    prompt.push_str(chain_text);
    prompt.push('\n');
    prompt
}

impl Editor {
    /// Write a full article for the selected option.
    ///
    /// Placeholder markers found in the returned markdown are added to
    /// `source_placeholders` when the generator left them out.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidInput`] before any generator call when the
    /// transcript or option id is unusable, or [`EditorError::Generation`]
    /// when generation fails.
    #[instrument(skip_all, fields(option_id = %request.option_id))]
    pub async fn draft(&self, request: &DraftRequest) -> Result<DraftResult, EditorError> {
        request.check()?;
        let prompt = compose_draft_prompt(
            &request.chain_text,
            &request.option_id,
            &request.constraints(),
            self.settings,
        );
        let mut draft = self.client.generate(&prompt, &self.draft_schema).await?;
        reconcile_placeholders(&mut draft);
        info!(
            placeholders = draft.source_placeholders.len(),
            checklist = draft.research_checklist.len(),
            "draft complete"
        );
        Ok(draft)
    }
}

/// Append markdown placeholders the generator did not list.
///
/// Listed entries may be bare queries or full `[SOURCE NEEDED: ...]`
/// markers; both count as covering their query.
fn reconcile_placeholders(draft: &mut DraftResult) {
    let mut listed: Vec<String> = draft
        .source_placeholders
        .iter()
        .flat_map(|entry| {
            let queries = source_placeholders(entry);
            if queries.is_empty() {
                vec![entry.trim().to_string()]
            } else {
                queries
            }
        })
        .collect();

    for query in source_placeholders(&draft.article_markdown) {
        if !listed.contains(&query) {
            debug!(%query, "placeholder missing from sourcePlaceholders");
            draft.source_placeholders.push(query.clone());
            listed.push(query);
        }
    }
}
