use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use quill_config::QuillConfig;
use quill_editor::{DraftSettings, Editor};
use quill_genai::GeminiClient;

/// Load `.env`, then the layered configuration.
pub fn load_config() -> anyhow::Result<QuillConfig> {
    QuillConfig::load_with_dotenv().context("failed to load quill configuration")
}

/// Build the process-wide editor over the configured Gemini client.
pub fn build_editor(config: &QuillConfig) -> anyhow::Result<Arc<Editor>> {
    let genai = config.require_genai().context(
        "generation service is not configured; set GEMINI_API_KEY or QUILL_GENAI__API_KEY",
    )?;
    let client = GeminiClient::new(genai).context("failed to build Gemini client")?;
    let editor = Editor::new(Arc::new(client), DraftSettings::from(&config.draft))
        .context("failed to initialize editor")?;
    Ok(Arc::new(editor))
}

/// Read a text input from a file path, or from stdin when `source` is `-`.
pub fn read_input(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }

    let path = Path::new(source);
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
