//! Headline extraction for the SKKU website.
//!
//! SKKU's board pages come in several layouts (notice tables, list-style
//! boards, English-site variants), so extraction runs an ordered selector
//! cascade and keeps collecting until five plausible headlines are held.
//! Navigation labels, bare numbers, and date-like rows are filtered out.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Upper bound on headlines collected per page and rendered per report
pub const MAX_ITEMS: usize = 5;

/// Selector cascade, ordered from the most specific board layouts to generic
/// anchor sweeps. Later entries only run while fewer than [`MAX_ITEMS`]
/// headlines are held.
const SELECTORS: &[&str] = &[
    // Notice board selectors
    "div.board-list table tbody tr",
    "table.board-table tbody tr",
    ".board-wrap .board-list-wrap table tbody tr",
    "ul.board-list li",
    // Generic selectors
    "div[class*='news'] a",
    "div[class*='notice'] a",
    "table[class*='board'] td.subject a",
    "table[class*='board'] td.title a",
    // More specific
    ".board-list tr td.subject",
    ".board-list tr td.title",
    // English page selectors
    ".eng_board tr td.subject",
    ".eng_board tr td.title",
];

/// Navigation words that mark an extracted string as noise (case-insensitive
/// substring match; the Korean entries are pagination labels)
const SKIP_WORDS: &[&str] = &["view all", "more", "목록", "이전", "다음", "처음", "마지막"];

/// Leading bullet/symbol characters stripped during post-processing
const BULLET_CHARS: &[char] = &[
    '·', '•', '■', '□', '▶', '►', '▷', '▪', '▫', '◆', '◇', '○', '●', '★', '☆', '※',
];

/// Headlines split by script, alive only for one extraction call
#[derive(Debug, Default)]
pub struct LanguageBuckets {
    pub korean: Vec<String>,
    pub english: Vec<String>,
}

/// Extract up to [`MAX_ITEMS`] raw headline strings from one page.
///
/// Selector-parse failures abort the whole extraction; the caller converts
/// that into its catch-all error message.
pub fn extract_headlines(html: &str) -> Result<Vec<String>, String> {
    let document = Html::parse_document(html);
    let mut items: Vec<String> = Vec::new();

    for selector_str in SELECTORS {
        let selector = Selector::parse(selector_str).map_err(|e| e.to_string())?;
        let mut matched = 0usize;

        for element in document.select(&selector) {
            matched += 1;
            let title = collapse_whitespace(&element_title(element));
            if is_noise(&title) {
                continue;
            }
            if !items.contains(&title) {
                debug!(title = %title, "Found news item");
                items.push(title);
            }
            if items.len() >= MAX_ITEMS {
                break;
            }
        }

        if matched > 0 {
            debug!(count = matched, selector = *selector_str, "Selector matched");
        }
        if items.len() >= MAX_ITEMS {
            break;
        }
    }

    Ok(items)
}

/// Pull the headline text out of a matched element: a nested link wins, then
/// a subject/title cell, then the element's own text.
fn element_title(element: ElementRef) -> String {
    if let Ok(link_selector) = Selector::parse("a") {
        if let Some(link) = element.select(&link_selector).next() {
            let text = joined_text(link);
            if !text.trim().is_empty() {
                return text;
            }
        }
    }

    if let Ok(cell_selector) = Selector::parse("td.subject, td.title") {
        if let Some(cell) = element.select(&cell_selector).next() {
            return joined_text(cell);
        }
    }

    joined_text(element)
}

fn joined_text(element: ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Heuristic filter for navigation labels and date/ID-only rows
fn is_noise(title: &str) -> bool {
    if title.is_empty() {
        return true;
    }

    let lowered = title.to_lowercase();
    if SKIP_WORDS.iter().any(|word| lowered.contains(word)) {
        return true;
    }

    // Very short titles, bare numbers, and hyphen-heavy rows are dates or IDs.
    if title.chars().count() <= 5 {
        return true;
    }
    if title.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    if title.chars().filter(|&c| c == '-').count() > 2 {
        return true;
    }

    false
}

/// True when the text contains any Hangul-syllable character (U+AC00..=U+D7A3)
pub fn is_korean(text: &str) -> bool {
    text.chars()
        .any(|c| ('\u{AC00}'..='\u{D7A3}').contains(&c))
}

/// Clean raw items and split them into Korean / non-Korean buckets.
///
/// Leading bullets are stripped, emptied items dropped, and within each
/// bucket an item counts as a duplicate when it contains or is contained by
/// an already-kept item.
pub fn bucket_by_language(raw_items: &[String]) -> LanguageBuckets {
    let mut buckets = LanguageBuckets::default();

    for item in raw_items {
        let cleaned = item.trim_start_matches(BULLET_CHARS).trim();
        if cleaned.is_empty() {
            continue;
        }

        let bucket = if is_korean(cleaned) {
            &mut buckets.korean
        } else {
            &mut buckets.english
        };

        let duplicate = bucket
            .iter()
            .any(|existing| cleaned.contains(existing.as_str()) || existing.contains(cleaned));
        if !duplicate {
            bucket.push(cleaned.to_string());
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD_HTML: &str = r#"
        <html><body>
          <div class="board-list">
            <table><tbody>
              <tr><td class="subject"><a href="/n/1">SKKU opens new AI research center</a></td><td>2025-08-20</td></tr>
              <tr><td class="subject"><a href="/n/2">Fall semester registration guide released</a></td><td>2025-08-21</td></tr>
              <tr><td class="subject"><a href="/n/3">View All</a></td></tr>
              <tr><td class="subject"><a href="/n/4">1234567</a></td></tr>
              <tr><td class="subject"><a href="/n/5">short</a></td></tr>
            </tbody></table>
          </div>
        </body></html>
    "#;

    #[test]
    fn test_extract_headlines_from_board_table() {
        let items = extract_headlines(BOARD_HTML).unwrap();
        assert_eq!(
            items,
            vec![
                "SKKU opens new AI research center".to_string(),
                "Fall semester registration guide released".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract_prefers_link_text_then_subject_cell() {
        let html = r#"
            <html><body>
              <div class="board-list"><table><tbody>
                <tr><td class="subject">Scholarship deadline extended to September</td><td>12</td></tr>
              </tbody></table></div>
            </body></html>
        "#;
        let items = extract_headlines(html).unwrap();
        assert_eq!(
            items,
            vec!["Scholarship deadline extended to September".to_string()]
        );
    }

    #[test]
    fn test_extract_caps_at_five_items() {
        let rows: String = (0..8)
            .map(|i| {
                format!(
                    "<tr><td class=\"subject\"><a>Notice number {} for students</a></td></tr>",
                    i
                )
            })
            .collect();
        let html = format!(
            "<html><body><div class=\"board-list\"><table><tbody>{}</tbody></table></div></body></html>",
            rows
        );
        let items = extract_headlines(&html).unwrap();
        assert_eq!(items.len(), MAX_ITEMS);
    }

    #[test]
    fn test_extract_from_generic_anchor_selector() {
        let html = r#"
            <html><body>
              <div class="main-news-area">
                <a href="/a">Global engagement fair coming to campus</a>
                <a href="/b">다음</a>
              </div>
            </body></html>
        "#;
        let items = extract_headlines(html).unwrap();
        assert_eq!(
            items,
            vec!["Global engagement fair coming to campus".to_string()]
        );
    }

    #[test]
    fn test_no_match_yields_empty() {
        let html = "<html><body><p>nothing to see</p></body></html>";
        assert!(extract_headlines(html).unwrap().is_empty());
    }

    #[test]
    fn test_is_noise_filters() {
        assert!(is_noise(""));
        assert!(is_noise("View All Notices"));
        assert!(is_noise("더보기 more"));
        assert!(is_noise("목록으로 돌아가기"));
        assert!(is_noise("short"));
        assert!(is_noise("123456"));
        assert!(is_noise("2024-01-15-001-a"));
        assert!(!is_noise("SKKU opens new AI research center"));
        assert!(!is_noise("성균관대학교 장학금 공지"));
    }

    #[test]
    fn test_is_korean() {
        assert!(is_korean("성균관대학교"));
        assert!(is_korean("Notice: 장학금"));
        assert!(!is_korean("SKKU notice"));
        assert!(!is_korean(""));
    }

    #[test]
    fn test_bucket_strips_bullets_and_splits_by_script() {
        let raw = vec![
            "· 성균관대학교 장학금 공지".to_string(),
            "▶ SKKU opens new AI research center".to_string(),
            "★".to_string(),
        ];
        let buckets = bucket_by_language(&raw);
        assert_eq!(buckets.korean, vec!["성균관대학교 장학금 공지".to_string()]);
        assert_eq!(
            buckets.english,
            vec!["SKKU opens new AI research center".to_string()]
        );
    }

    #[test]
    fn test_bucket_containment_dedup() {
        let raw = vec![
            "SKKU opens new AI research center".to_string(),
            "SKKU opens new AI research center on Suwon campus".to_string(),
            "Fall semester registration guide".to_string(),
        ];
        let buckets = bucket_by_language(&raw);
        assert_eq!(
            buckets.english,
            vec![
                "SKKU opens new AI research center".to_string(),
                "Fall semester registration guide".to_string(),
            ]
        );
    }
}
