use std::path::Path;

use crate::error::{LyricsError, Result};
use crate::models::AliasMap;

/// Load a lyrics transcript as UTF-8 text
///
/// A missing file surfaces as `LyricsError::Io` with `NotFound`; bytes that
/// are not UTF-8 surface as `LyricsError::Decode`.
pub fn load_lyrics_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| LyricsError::io(path, e))?;
    String::from_utf8(bytes).map_err(|_| LyricsError::Decode {
        path: path.to_path_buf(),
    })
}

/// Split transcript text into lines, dropping `\n` / `\r\n` terminators
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

/// Load an alias table from a JSON file of `{ canonical: [aliases] }`
pub fn load_alias_file(path: &Path) -> Result<AliasMap> {
    let content = load_lyrics_file(path)?;
    AliasMap::from_json(&content).map_err(|source| LyricsError::AliasFile {
        source,
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_lyrics_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("song.txt");
        std::fs::write(&path, "[raekwon]\nyo\n").unwrap();

        let contents = load_lyrics_file(&path).unwrap();
        assert!(contents.contains("[raekwon]"));
        assert_eq!(split_lines(&contents), vec!["[raekwon]", "yo"]);
    }

    #[test]
    fn test_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_lyrics_file(&dir.path().join("missing.txt")).unwrap_err();

        match err {
            LyricsError::Io { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("expected IO error, got {:?}", other),
        }
    }

    #[test]
    fn test_encoding_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_encoding.txt");
        std::fs::write(&path, [0xff, 0xfe, 0xfd, 0xfc]).unwrap();

        let err = load_lyrics_file(&path).unwrap_err();
        assert!(matches!(err, LyricsError::Decode { .. }));
    }

    #[test]
    fn test_split_lines_crlf() {
        assert_eq!(split_lines("a\r\nb\n\nc"), vec!["a", "b", "", "c"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_load_alias_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aliases.json");
        std::fs::write(&path, r#"{"rza": ["rza", "bobby digital"], "gza": ["the genius"]}"#).unwrap();

        let aliases = load_alias_file(&path).unwrap();
        assert_eq!(aliases.len(), 2);
        assert_eq!(aliases.aliases("gza").unwrap(), &["gza".to_string(), "the genius".to_string()]);
    }

    #[test]
    fn test_load_alias_file_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aliases.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(matches!(
            load_alias_file(&path).unwrap_err(),
            LyricsError::AliasFile { .. }
        ));
    }
}
