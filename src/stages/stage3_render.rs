use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{LyricsError, Result};
use crate::io::{FormatConfig, OutputFormat, PerformerOutput};
use crate::models::PerformerChunks;

/// Configuration for Stage 3 rendering
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub formatting: FormatConfig,
    /// Canonical performer to write; every performer when unset
    pub performer: Option<String>,
}

/// Result of Stage 3 rendering
#[derive(Debug)]
pub struct RenderResult {
    /// Files written, one per performer
    pub written: Vec<PathBuf>,
    /// Attributed lines across the written performers
    pub lines_written: usize,
}

/// Execute Stage 3: write each selected performer's lines into `output_dir`
///
/// The directory is created if missing. Performers with no attributed lines
/// still get a (possibly empty) file.
pub fn execute_render(
    chunks: &PerformerChunks,
    output_dir: &Path,
    config: &RenderConfig,
) -> Result<RenderResult> {
    std::fs::create_dir_all(output_dir).map_err(|e| LyricsError::io(output_dir, e))?;

    let selected: Vec<(&str, &[String])> = match &config.performer {
        Some(name) => {
            let lines = chunks
                .lines(name)
                .ok_or_else(|| LyricsError::PerformerNotFound(name.clone()))?;
            vec![(name.as_str(), lines)]
        }
        None => chunks.iter().collect(),
    };

    let mut result = RenderResult {
        written: Vec::with_capacity(selected.len()),
        lines_written: 0,
    };

    for (performer, lines) in selected {
        let path = PerformerOutput::new(performer, lines).write_file(
            output_dir,
            config.format,
            &config.formatting,
        )?;
        info!("Wrote {} lines for {} to {:?}", lines.len(), performer, path);
        result.lines_written += lines.len();
        result.written.push(path);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AliasMap;

    fn chunks() -> PerformerChunks {
        let aliases: AliasMap = [("rza", vec!["rza"]), ("ol' dirty bastard", vec!["odb"])]
            .into_iter()
            .collect();
        let mut chunks = PerformerChunks::seeded(&aliases);
        chunks.push("rza", "line one");
        chunks.push("rza", "line two");
        chunks
    }

    #[test]
    fn test_render_all_performers() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("out");

        let result = execute_render(&chunks(), &out, &RenderConfig::default()).unwrap();

        assert_eq!(result.written.len(), 2);
        assert_eq!(result.lines_written, 2);
        assert_eq!(
            std::fs::read_to_string(out.join("rza.txt")).unwrap(),
            "line one\nline two\n"
        );
        assert_eq!(
            std::fs::read_to_string(out.join("ol__dirty_bastard.txt")).unwrap(),
            ""
        );
    }

    #[test]
    fn test_render_single_performer_pairs() {
        let dir = tempfile::tempdir().unwrap();
        let config = RenderConfig {
            format: OutputFormat::Pairs,
            performer: Some("rza".to_string()),
            ..Default::default()
        };

        let result = execute_render(&chunks(), dir.path(), &config).unwrap();

        assert_eq!(result.written, vec![dir.path().join("rza.jsonl")]);
        let contents = std::fs::read_to_string(&result.written[0]).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }

    #[test]
    fn test_render_unknown_performer() {
        let dir = tempfile::tempdir().unwrap();
        let config = RenderConfig {
            performer: Some("mister rogers".to_string()),
            ..Default::default()
        };

        let err = execute_render(&chunks(), dir.path(), &config).unwrap_err();
        assert!(matches!(err, LyricsError::PerformerNotFound(_)));
    }
}
