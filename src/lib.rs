pub mod error;
pub mod io;
pub mod matching;
pub mod models;
pub mod stages;

pub use error::{LyricsError, Result};
pub use io::{
    load_alias_file, load_lyrics_file, split_lines, FormatConfig, OutputFormat, PerformerOutput,
};
pub use matching::{
    classify, classify_key, find_all_canonical_matches, resolve_canonical, resolve_performer_arg,
    MatchConfig,
};
pub use models::{
    AliasMap, AttributionMode, AttributionResult, Classification, IgnoreSet, LinePair,
    MarkerRecord, PerformerChunks,
};
pub use stages::{
    attribute_lines, execute_render, extract_key_candidates, is_marker_line, normalize_key,
    segment_pairs, NormalizerConfig, RenderConfig, RenderResult,
};
