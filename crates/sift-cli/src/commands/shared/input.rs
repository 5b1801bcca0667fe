use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Resolve article content from `--content`, `--content-file`, or piped stdin.
///
/// `--content-file -` always reads stdin. With neither flag, stdin is read
/// only when it is not a terminal; otherwise the content is empty.
pub fn read_content(
    content: Option<&str>,
    file: Option<&Path>,
    stdin: &mut impl Read,
    stdin_is_terminal: bool,
) -> anyhow::Result<String> {
    if let Some(content) = content {
        return Ok(content.to_string());
    }

    match file {
        Some(path) if path == Path::new("-") => read_all(stdin),
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read content file {}", path.display())),
        None if stdin_is_terminal => {
            tracing::warn!("no content given; scoring an empty article");
            Ok(String::new())
        }
        None => read_all(stdin),
    }
}

fn read_all(stdin: &mut impl Read) -> anyhow::Result<String> {
    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .context("failed to read content from stdin")?;
    Ok(buf)
}
