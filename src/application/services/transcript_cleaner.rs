use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static BOLD_MARKERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

static UNDERLINE_MARKERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__([^_]+)__").unwrap());

static HEADING_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*#{1,6}\s").unwrap());

static TAGLINE_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^\s*tagline\s*:").unwrap());

static BULLET_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[-*•]\s+").unwrap());

/// Normalizes raw model output before dialogue extraction.
///
/// Strips markdown heading lines, bold and underline marker pairs, leading
/// bullet markers, and standalone tagline lines. Single `*`-emphasis spans
/// are kept intact because one extraction strategy keys on them.
pub fn clean_transcript(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    let without_bold = BOLD_MARKERS.replace_all(&normalized, "$1");
    let without_underline = UNDERLINE_MARKERS.replace_all(&without_bold, "$1");

    let mut result = String::with_capacity(without_underline.len());
    for line in without_underline.lines() {
        let line = line.trim_end();
        if HEADING_LINE.is_match(line) || TAGLINE_LINE.is_match(line) {
            continue;
        }
        let line = BULLET_MARKER.replace(line, "");
        result.push_str(&line);
        result.push('\n');
    }

    result.trim().to_string()
}

static RESIDUAL_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>\n]+>").unwrap());

/// Scrubs one dialogue turn right before it is sent to a speech provider.
///
/// Drops HTML-like tags and leftover emphasis markers that would otherwise
/// be read aloud.
pub fn strip_speech_markup(text: &str) -> String {
    let without_tags = RESIDUAL_TAG.replace_all(text, " ");

    let mut result = String::with_capacity(without_tags.len());
    for ch in without_tags.chars() {
        if ch != '*' && ch != '_' {
            result.push(ch);
        }
    }

    result.trim().to_string()
}
