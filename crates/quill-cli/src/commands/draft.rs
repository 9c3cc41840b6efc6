use anyhow::Context;
use quill_config::QuillConfig;
use quill_core::requests::DraftRequest;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::DraftArgs;
use crate::output::output;
use crate::progress::Progress;

/// Handle `quill draft`.
pub async fn handle(
    args: &DraftArgs,
    config: &QuillConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let chain_text = bootstrap::read_input(&args.chain)?;
    let request = DraftRequest::new(
        chain_text,
        args.option_id.clone(),
        args.constraints.to_constraints(None),
    );
    let editor = bootstrap::build_editor(config)?;

    let progress = Progress::spinner(flags, &format!("Drafting the '{}' article", args.option_id));
    let result = editor.draft(&request).await;
    progress.finish(&result, "draft failed");

    let draft = result.context("failed to draft article")?;
    if !flags.quiet && !draft.source_placeholders.is_empty() {
        eprintln!(
            "{} source placeholder(s) need verification",
            draft.source_placeholders.len()
        );
    }
    output(&draft, flags.format)
}
