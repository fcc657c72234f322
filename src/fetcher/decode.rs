//! Charset detection and decoding of fetched bodies.
//!
//! Detection order: Content-Type header, `<meta charset>` / `http-equiv`
//! declarations in the first 4KB, then chardetng as a last resort.

use regex::Regex;

use std::sync::LazyLock;

use crate::fetcher::{errors::FetchError, types::Charset};

const SNIFF_WINDOW: usize = 4096;

static HEADER_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

pub fn decode_body(content_type: &str, body: &[u8]) -> Result<(String, Charset), FetchError> {
    let charset = detect_charset(content_type, body);
    let (decoded, _encoding, had_errors) = charset.encoding().decode(body);
    if had_errors {
        return Err(FetchError::Charset(format!(
            "failed to decode body as {}",
            charset.encoding().name()
        )));
    }
    Ok((decoded.into_owned(), charset))
}

fn detect_charset(content_type: &str, body: &[u8]) -> Charset {
    if let Some(charset) = charset_from_label(HEADER_CHARSET.captures(content_type)) {
        return charset;
    }

    let sniff = &body[..body.len().min(SNIFF_WINDOW)];
    let sniff_str = String::from_utf8_lossy(sniff);
    if let Some(charset) = charset_from_label(META_CHARSET.captures(&sniff_str)) {
        return charset;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(sniff, false);
    Charset::from_encoding(detector.guess(None, true))
}

fn charset_from_label(captures: Option<regex::Captures<'_>>) -> Option<Charset> {
    let label = captures?.get(1)?.as_str().to_lowercase();
    let encoding = encoding_rs::Encoding::for_label(label.as_bytes())?;
    Some(Charset::from_encoding(encoding))
}
