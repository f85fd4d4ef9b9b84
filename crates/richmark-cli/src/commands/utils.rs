//! Input and output helpers shared by commands.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::debug;

use crate::error::{Result, ResultExt};
use crate::ui;

/// Read the whole input file, or stdin when `input` is `None` or `-`.
pub(crate) async fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "Reading input file");
            tokio::fs::read_to_string(path).await.with_path(path)
        }
        _ => {
            debug!("Reading input from stdin");
            if std::io::stdin().is_terminal() {
                ui::info("Reading from stdin, press Ctrl-D to finish");
            }
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            Ok(buf)
        }
    }
}

/// Write `content` to the output file, or to stdout followed by a newline.
pub(crate) async fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            tokio::fs::write(path, content)
                .await
                .context(format!("Failed to write {}", path.display()))?;
            ui::success(&format!("Wrote {}", path.display()));
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(content.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}

/// Working directory used to look for `richmark.toml`.
pub(crate) fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to determine current directory")
}
