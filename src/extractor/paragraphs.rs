use scraper::{Html, Selector};

use std::sync::LazyLock;

const MIN_PARAGRAPH_CHARS: usize = 50;

// Crisis-hotline disclaimers appear as ordinary paragraphs on many news
// sites and would skew sentiment if kept.
const PARAGRAPH_NOISE_MARKER: &str = "samaritans";

static ARTICLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("article").unwrap());
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());

/// Collect article paragraphs and join them with single spaces.
///
/// If the document has a semantic `<article>` container, only paragraphs
/// inside it are considered; otherwise every `<p>` in the document is.
/// Paragraphs with at most 50 visible characters, or containing the noise
/// marker, are dropped. Malformed HTML never fails: scraper parses whatever
/// it is given and an empty document simply yields an empty string.
pub fn collect_paragraphs(html: &str) -> String {
    let document = Html::parse_document(html);

    let paragraphs: Vec<String> = match document.select(&ARTICLE).next() {
        Some(article) => article
            .select(&PARAGRAPH)
            .filter_map(|p| keep_paragraph(&visible_text(p)))
            .collect(),
        None => document
            .select(&PARAGRAPH)
            .filter_map(|p| keep_paragraph(&visible_text(p)))
            .collect(),
    };

    paragraphs.join(" ")
}

fn visible_text(element: scraper::ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn keep_paragraph(text: &str) -> Option<String> {
    if text.chars().count() <= MIN_PARAGRAPH_CHARS {
        return None;
    }
    if text.to_lowercase().contains(PARAGRAPH_NOISE_MARKER) {
        return None;
    }
    Some(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_long_paragraphs_inside_article() {
        let long = "This paragraph definitely has more than fifty characters in it.";
        assert!(long.len() > 50);
        let html = format!(
            "<html><body><article><p>{long}</p><p>Too short to keep.</p></article>\
             <p>Outside the article container, so ignored even though it is long enough.</p>\
             </body></html>"
        );

        let joined = collect_paragraphs(&html);
        assert_eq!(joined, long);
    }

    #[test]
    fn falls_back_to_all_paragraphs_without_article() {
        let first = "The first paragraph carries enough characters to clear the length filter.";
        let second = "The second paragraph also carries enough characters to clear the filter.";
        let html = format!("<html><body><p>{first}</p><p>{second}</p></body></html>");

        let joined = collect_paragraphs(&html);
        assert_eq!(joined, format!("{first} {second}"));
    }

    #[test]
    fn drops_paragraphs_with_noise_marker() {
        let html = "<html><body>\
            <p>If you are affected by this story, the Samaritans can be contacted for free.</p>\
            <p>Markets rallied strongly on Thursday after the central bank announcement.</p>\
            </body></html>";

        let joined = collect_paragraphs(html);
        assert!(!joined.to_lowercase().contains("samaritans"));
        assert!(joined.contains("Markets rallied"));
    }

    #[test]
    fn collapses_whitespace_in_visible_text() {
        let html = "<html><body><p>Spread   across\n   several\t\tlines, \
            this paragraph still counts its visible characters once.</p></body></html>";

        let joined = collect_paragraphs(html);
        assert!(joined.contains("Spread across several lines,"));
    }

    #[test]
    fn empty_and_malformed_documents_yield_empty_output() {
        assert_eq!(collect_paragraphs(""), "");
        assert_eq!(collect_paragraphs("<html><div>Unclosed"), "");
    }
}
