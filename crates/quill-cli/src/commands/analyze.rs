use anyhow::Context;
use quill_config::QuillConfig;
use quill_core::requests::AnalyzeRequest;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::output::output;
use crate::progress::Progress;

/// Handle `quill analyze`.
pub async fn handle(
    args: &AnalyzeArgs,
    config: &QuillConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let chain_text = bootstrap::read_input(&args.chain)?;
    let request = AnalyzeRequest::new(
        chain_text,
        args.constraints.to_constraints(args.seo_keyword.clone()),
    );
    let editor = bootstrap::build_editor(config)?;

    let progress = Progress::spinner(flags, "Analyzing prompt chain");
    let result = editor.analyze(&request).await;
    progress.finish(&result, "analysis failed");

    let analysis = result.context("failed to analyze chain")?;
    output(&analysis, flags.format)
}
