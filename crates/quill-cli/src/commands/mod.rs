pub mod analyze;
pub mod draft;
pub mod rewrite;
pub mod schema;
pub mod serve;

use quill_config::QuillConfig;

use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &QuillConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => serve::handle(&args, config).await,
        Commands::Analyze(args) => analyze::handle(&args, config, flags).await,
        Commands::Draft(args) => draft::handle(&args, config, flags).await,
        Commands::Rewrite(args) => rewrite::handle(&args, config, flags).await,
        Commands::Schema(args) => schema::handle(&args, flags),
    }
}
