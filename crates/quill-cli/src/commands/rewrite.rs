use anyhow::Context;
use quill_config::QuillConfig;
use quill_core::requests::RewriteRequest;
use quill_editor::source_placeholders;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::RewriteArgs;
use crate::output::output;
use crate::progress::Progress;

/// Handle `quill rewrite`.
pub async fn handle(
    args: &RewriteArgs,
    config: &QuillConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let article_markdown = bootstrap::read_input(&args.article)?;
    let request = RewriteRequest::new(article_markdown, args.instruction.clone());
    let editor = bootstrap::build_editor(config)?;

    let progress = Progress::spinner(flags, "Rewriting article");
    let result = editor.rewrite(&request).await;
    progress.finish(&result, "rewrite failed");

    let rewrite = result.context("failed to rewrite article")?;
    if !flags.quiet {
        let before = source_placeholders(&request.article_markdown).len();
        let after = source_placeholders(&rewrite.article_markdown).len();
        if before != after {
            eprintln!("source placeholders: {before} before, {after} after rewrite");
        }
    }
    output(&rewrite, flags.format)
}
