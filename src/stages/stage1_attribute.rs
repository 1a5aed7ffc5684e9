use tracing::{debug, warn};

use crate::matching::{classify_key, find_all_canonical_matches, MatchConfig};
use crate::models::{
    AttributionMode, AttributionResult, Classification, MarkerRecord, PerformerChunks,
};

use super::{is_marker_line, normalize_key};

/// Execute the attribution sweep over transcript lines
///
/// Single forward pass. Each marker line switches the mode for the lines
/// that follow it:
/// - performer key with exactly one match -> that performer owns the lines
/// - performer key with several matches -> skip (collaborations are never
///   duplicated into every participant's output)
/// - performer key with no match -> none
/// - ignore / skip key -> ignore / skip
///
/// Content lines are kept only while a performer owns them. Marker lines are
/// never emitted.
pub fn attribute_lines<S: AsRef<str>>(lines: &[S], config: &MatchConfig) -> AttributionResult {
    let mut chunks = PerformerChunks::seeded(&config.aliases);
    let mut markers = Vec::new();
    let mut mode = AttributionMode::None;

    for (line_index, line) in lines.iter().enumerate() {
        let line = line.as_ref().trim_end_matches(['\r', '\n']);

        if is_marker_line(line) {
            let record = interpret_marker(line_index, line, config);
            debug!(
                "Line {}: marker {:?} -> {} ({:?})",
                line_index, record.key, record.classification, record.mode
            );
            mode = record.mode.clone();
            markers.push(record);
            continue;
        }

        if let Some(performer) = mode.performer() {
            chunks.push(performer, line);
        }
    }

    AttributionResult { chunks, markers }
}

/// Classify a marker line and decide the mode it enters
fn interpret_marker(line_index: usize, raw: &str, config: &MatchConfig) -> MarkerRecord {
    let key = normalize_key(raw, &config.normalizer);
    let classification = classify_key(&key, &config.aliases, &config.ignore, &config.normalizer);

    let (matches, mode) = match classification {
        Classification::Performer => {
            let matches: Vec<String> =
                find_all_canonical_matches(&key, &config.aliases, &config.normalizer)
                    .into_iter()
                    .collect();
            let mode = match matches.as_slice() {
                [single] => AttributionMode::Performer(single.clone()),
                [] => {
                    warn!(
                        "Marker {:?} on line {} classified as performer but matched no performer",
                        key, line_index
                    );
                    AttributionMode::None
                }
                _ => AttributionMode::Skip,
            };
            (matches, mode)
        }
        Classification::Ignore => (Vec::new(), AttributionMode::Ignore),
        Classification::Skip => (Vec::new(), AttributionMode::Skip),
    };

    MarkerRecord {
        line_index,
        raw: raw.to_string(),
        key,
        classification,
        matches,
        mode,
    }
}
