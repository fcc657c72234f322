pub mod cleaner;
pub mod paragraphs;

use crate::fetcher::types::PageResponse;

/// Turn a fetched page into cleaned article text.
///
/// Two filter stages run back to back: the paragraph-level filter while
/// collecting `<p>` text, then the line-level cleaner over the joined
/// result. They use distinct noise markers on purpose; the stages are kept
/// separate so each marker applies at its own granularity. An empty string
/// means the page had no qualifying content.
pub fn extract_article_text(resp: &PageResponse) -> String {
    cleaner::clean_lines(&paragraphs::collect_paragraphs(&resp.body_utf8))
}
