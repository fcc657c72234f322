const MIN_LINE_CHARS: usize = 30;

// Aggregator cross-posts ("discuss on reddit" and the like) survive the
// paragraph filter on some layouts, so they get a second pass here.
const LINE_NOISE_MARKER: &str = "reddit";

/// Line-level cleanup of extracted text.
///
/// Splits on newlines, trims each line, keeps lines with more than 30
/// trimmed characters that don't contain the noise marker, and rejoins with
/// newlines. Paragraph text joined with spaces rarely has internal line
/// breaks, so this usually passes text through unchanged, but it runs
/// unconditionally and may legitimately reduce the text to empty.
pub fn clean_lines(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .filter(|line| {
            line.chars().count() > MIN_LINE_CHARS
                && !line.to_lowercase().contains(LINE_NOISE_MARKER)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
