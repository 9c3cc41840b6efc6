use clap::{Args, Subcommand};
use quill_core::ConstraintSet;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP service.
    Serve(ServeArgs),
    /// Digest a prompt chain into claims and three article options.
    Analyze(AnalyzeArgs),
    /// Draft a full article for one option.
    Draft(DraftArgs),
    /// Rewrite an article body with an instruction.
    Rewrite(RewriteArgs),
    /// Print a registered JSON Schema, or list schema names.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Socket address to bind (overrides `server.listen`).
    #[arg(long)]
    pub listen: Option<String>,
}

/// Editorial constraints shared by analyze and draft.
#[derive(Clone, Debug, Default, Args)]
pub struct ConstraintArgs {
    /// Intended readers.
    #[arg(long)]
    pub audience: Option<String>,
    /// Voice of the article.
    #[arg(long)]
    pub tone: Option<String>,
    /// Target length, e.g. "800 words".
    #[arg(long)]
    pub length: Option<String>,
    /// Where the article will be published.
    #[arg(long)]
    pub platform: Option<String>,
}

impl ConstraintArgs {
    #[must_use]
    pub fn to_constraints(&self, seo_keyword: Option<String>) -> ConstraintSet {
        ConstraintSet {
            audience: self.audience.clone(),
            tone: self.tone.clone(),
            length: self.length.clone(),
            platform: self.platform.clone(),
            seo_keyword,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Transcript file, or `-` for stdin.
    #[arg(long, value_name = "FILE")]
    pub chain: String,

    #[command(flatten)]
    pub constraints: ConstraintArgs,

    /// Keyword the article should rank for.
    #[arg(long)]
    pub seo_keyword: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DraftArgs {
    /// Transcript file, or `-` for stdin.
    #[arg(long, value_name = "FILE")]
    pub chain: String,

    /// Option id from a previous analysis (explainer, meta, research_brief).
    #[arg(long = "option", value_name = "ID")]
    pub option_id: String,

    #[command(flatten)]
    pub constraints: ConstraintArgs,
}

#[derive(Clone, Debug, Args)]
pub struct RewriteArgs {
    /// Markdown article file, or `-` for stdin.
    #[arg(long, value_name = "FILE")]
    pub article: String,

    /// Free-text editing instruction, e.g. "shorten".
    #[arg(long)]
    pub instruction: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name; lists all names when omitted.
    pub name: Option<String>,
}
