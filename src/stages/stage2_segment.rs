use crate::models::LinePair;

/// Split lines into verses at blank lines and pair adjacent lines
///
/// A verse of N lines yields N-1 pairs in order; pairs never cross a blank
/// line. The trailing verse is flushed without needing a final blank line.
pub fn segment_pairs<S: AsRef<str>>(lines: &[S]) -> Vec<LinePair> {
    let mut pairs = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            flush_block(&mut block, &mut pairs);
        } else {
            block.push(line);
        }
    }
    flush_block(&mut block, &mut pairs);

    pairs
}

fn flush_block(block: &mut Vec<&str>, pairs: &mut Vec<LinePair>) {
    pairs.extend(block.windows(2).map(|w| LinePair::new(w[0], w[1])));
    block.clear();
}
