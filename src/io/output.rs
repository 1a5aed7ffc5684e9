use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;

use crate::error::{LyricsError, Result};
use crate::models::LinePair;
use crate::stages::segment_pairs;

/// Serialization format for a performer's lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one attributed line per line
    #[default]
    Text,
    /// JSONL prompt/completion records from adjacent lines
    Pairs,
    /// JSONL chat records (system, user, assistant)
    Chat,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Pairs | OutputFormat::Chat => "jsonl",
        }
    }
}

/// Fixed tokens and prompts layered on top of line pairs
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Appended to every prompt
    pub prompt_suffix: String,
    /// Appended to every completion (which also gets a leading space)
    pub completion_suffix: String,
    /// System message for chat records; `{performer}` is substituted
    pub system_prompt: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            prompt_suffix: "\n\n###\n\n".to_string(),
            completion_suffix: " END".to_string(),
            system_prompt:
                "You are {performer}, a member of the group. Reply with the next lyric line."
                    .to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PairRecord {
    pub prompt: String,
    pub completion: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRecord {
    pub messages: Vec<ChatMessage>,
}

impl PairRecord {
    fn from_pair(pair: &LinePair, config: &FormatConfig) -> Self {
        Self {
            prompt: format!("{}{}", pair.prompt, config.prompt_suffix),
            completion: format!(" {}{}", pair.completion, config.completion_suffix),
        }
    }
}

impl ChatRecord {
    fn from_pair(pair: &LinePair, performer: &str, config: &FormatConfig) -> Self {
        Self {
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: config.system_prompt.replace("{performer}", performer),
                },
                ChatMessage {
                    role: "user",
                    content: pair.prompt.clone(),
                },
                ChatMessage {
                    role: "assistant",
                    content: pair.completion.clone(),
                },
            ],
        }
    }
}

/// One performer's attributed lines, ready to serialize
pub struct PerformerOutput<'a> {
    performer: &'a str,
    lines: &'a [String],
}

impl<'a> PerformerOutput<'a> {
    pub fn new(performer: &'a str, lines: &'a [String]) -> Self {
        Self { performer, lines }
    }

    /// File name for this performer in the given format
    pub fn file_name(&self, format: OutputFormat) -> String {
        format!("{}.{}", sanitize_file_stem(self.performer), format.extension())
    }

    /// Render the full file contents
    pub fn format(&self, format: OutputFormat, config: &FormatConfig) -> Result<String> {
        let mut output = String::new();

        match format {
            OutputFormat::Text => {
                for line in self.lines {
                    output.push_str(line);
                    output.push('\n');
                }
            }
            OutputFormat::Pairs => {
                for pair in segment_pairs(self.lines) {
                    output.push_str(&serde_json::to_string(&PairRecord::from_pair(&pair, config))?);
                    output.push('\n');
                }
            }
            OutputFormat::Chat => {
                for pair in segment_pairs(self.lines) {
                    let record = ChatRecord::from_pair(&pair, self.performer, config);
                    output.push_str(&serde_json::to_string(&record)?);
                    output.push('\n');
                }
            }
        }

        Ok(output)
    }

    /// Write into `dir`, returning the path written
    pub fn write_file(&self, dir: &Path, format: OutputFormat, config: &FormatConfig) -> Result<PathBuf> {
        let path = dir.join(self.file_name(format));
        let contents = self.format(format, config)?;
        let mut file = std::fs::File::create(&path).map_err(|e| LyricsError::io(&path, e))?;
        file.write_all(contents.as_bytes())
            .map_err(|e| LyricsError::io(&path, e))?;
        Ok(path)
    }
}

/// Replace every non-alphanumeric character with `_`
pub fn sanitize_file_stem(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}
