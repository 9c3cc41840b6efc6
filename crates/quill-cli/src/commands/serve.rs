use std::sync::Arc;

use anyhow::Context;
use quill_config::QuillConfig;
use quill_schema::SchemaRegistry;

use crate::bootstrap;
use crate::cli::root_commands::ServeArgs;
use crate::server::{self, AppState};

/// Handle `quill serve`.
pub async fn handle(args: &ServeArgs, config: &QuillConfig) -> anyhow::Result<()> {
    let mut server_config = config.server.clone();
    if let Some(listen) = &args.listen {
        server_config.listen.clone_from(listen);
    }
    let addr = server_config
        .listen_addr()
        .context("invalid listen address")?;

    let state = AppState {
        editor: bootstrap::build_editor(config)?,
        registry: Arc::new(SchemaRegistry::new()),
    };
    server::run(state, &server_config, addr).await
}
