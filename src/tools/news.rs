use super::Tool;
use crate::scrapers::skku::{self, LanguageBuckets, MAX_ITEMS};
use chrono::Local;
use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use std::time::Duration;
use tracing::{debug, info, warn};

const DEFAULT_BASE_URL: &str = "https://www.skku.edu";
const KOREAN_SITE_URL: &str = "https://www.skku.edu/skku/";
const ENGLISH_SITE_URL: &str = "https://www.skku.edu/eng/";

/// Hard cap on candidate pages that get to produce an HTTP response;
/// independent of how many candidate URLs exist.
const MAX_FETCHES: usize = 2;
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9,ko;q=0.8";
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Language preference for the news report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Korean,
    English,
    Both,
}

impl Language {
    /// Case-normalize a raw preference string; unrecognized values mean both.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "korean" => Language::Korean,
            "english" => Language::English,
            _ => Language::Both,
        }
    }

    fn includes_korean(self) -> bool {
        matches!(self, Language::Korean | Language::Both)
    }

    fn includes_english(self) -> bool {
        matches!(self, Language::English | Language::Both)
    }
}

/// Parameters for the news tool
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct NewsParams {
    /// Language preference: "korean", "english", or "both"
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "both".to_string()
}

impl Default for NewsParams {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// Best-effort scraper for recent SKKU news headlines.
///
/// Candidate pages are fetched in order until one yields headlines or the
/// fetch cap is hit; a fixed canned list stands in when nothing is found.
#[derive(Debug, Clone)]
pub struct NewsTool {
    client: Client,
    base_url: String,
}

impl Default for NewsTool {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsTool {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the tool at a different site base URL (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Produce the full news report for a language preference.
    ///
    /// Never fails: scraping faults degrade to a fixed message pointing at
    /// the official site for the requested language.
    pub async fn fetch_news(&self, language: Language) -> String {
        info!(?language, "Fetching SKKU news");
        match self.try_fetch_news(language).await {
            Ok(report) => report,
            Err(err) => {
                warn!(error = %err, "News extraction failed");
                let site = match language {
                    Language::English => ENGLISH_SITE_URL,
                    _ => KOREAN_SITE_URL,
                };
                format!(
                    "Error fetching news from SKKU website. \
                     Please visit the official website for current news: {}",
                    site
                )
            }
        }
    }

    async fn try_fetch_news(&self, language: Language) -> crate::Result<String> {
        let raw_items = self.collect_raw_items(language).await?;
        Ok(render_report(language, &raw_items))
    }

    /// Iterate candidate URLs in order, collecting raw headline strings.
    ///
    /// Transport failures skip the candidate without consuming a fetch slot;
    /// non-200 responses consume one but contribute nothing. Stops at the
    /// first page that yields items.
    async fn collect_raw_items(&self, language: Language) -> crate::Result<Vec<String>> {
        let mut raw_items: Vec<String> = Vec::new();
        let mut fetched = 0usize;

        for url in self.candidate_urls(language) {
            if fetched >= MAX_FETCHES {
                break;
            }

            debug!(%url, "Trying news source");
            let response = match self
                .client
                .get(&url)
                .timeout(FETCH_TIMEOUT)
                .header(header::USER_AGENT, BROWSER_USER_AGENT)
                .header(header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
                .header(header::ACCEPT, ACCEPT)
                .send()
                .await
            {
                Ok(response) => response,
                Err(err) => {
                    warn!(error = %err, %url, "News fetch failed");
                    continue;
                }
            };
            fetched += 1;

            if response.status() != StatusCode::OK {
                debug!(status = %response.status(), %url, "Skipping non-200 response");
                continue;
            }

            let html = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    warn!(error = %err, %url, "Failed to read response body");
                    continue;
                }
            };
            debug!(bytes = html.len(), %url, "Retrieved page");

            let page_items =
                skku::extract_headlines(&html).map_err(crate::ToolError::Scrape)?;
            for item in page_items {
                if !raw_items.contains(&item) {
                    raw_items.push(item);
                }
                if raw_items.len() >= MAX_ITEMS {
                    break;
                }
            }

            if !raw_items.is_empty() {
                break;
            }
        }

        info!(count = raw_items.len(), "Collected raw headlines");
        Ok(raw_items)
    }

    /// Candidate pages in priority order: main page, notices, news list, with
    /// the Korean site ahead of the English one when both are requested.
    fn candidate_urls(&self, language: Language) -> Vec<String> {
        let mut urls = Vec::new();
        if language.includes_korean() {
            urls.push(format!("{}/skku/index.do", self.base_url));
            urls.push(format!("{}/skku/news/notice_list.do", self.base_url));
            urls.push(format!("{}/skku/news/news_list.do", self.base_url));
        }
        if language.includes_english() {
            urls.push(format!("{}/eng/index.do", self.base_url));
            urls.push(format!("{}/eng/news/notice_list.do", self.base_url));
            urls.push(format!("{}/eng/news/news_list.do", self.base_url));
        }
        urls
    }
}

/// Pick the final headline list for a preference.
///
/// For `Both` with two non-empty buckets the lists are interleaved
/// one-from-each (Korean first) and the merge stops once five items are
/// held; the renderer truncates anything past five. With one empty bucket
/// the lists are simply concatenated.
fn select_for_preference(language: Language, buckets: &LanguageBuckets) -> Vec<String> {
    match language {
        Language::Korean => buckets.korean.clone(),
        Language::English => buckets.english.clone(),
        Language::Both => {
            if buckets.korean.is_empty() || buckets.english.is_empty() {
                let mut all = buckets.korean.clone();
                all.extend(buckets.english.iter().cloned());
                return all;
            }

            let mut merged = Vec::new();
            for i in 0..buckets.korean.len().max(buckets.english.len()) {
                if let Some(item) = buckets.korean.get(i) {
                    merged.push(item.clone());
                }
                if let Some(item) = buckets.english.get(i) {
                    merged.push(item.clone());
                }
                if merged.len() >= MAX_ITEMS {
                    break;
                }
            }
            merged
        }
    }
}

/// Canned headlines used when live extraction yields nothing
fn fallback_headlines(language: Language) -> Vec<String> {
    let items: &[&str] = match language {
        Language::Korean => &[
            "성균관대학교, 신규 국제학생 장학 프로그램 발표",
            "공과대학 AI 혁신 세미나 개최 예정",
            "성균관대학교, 최근 글로벌 대학 순위에서 상위권 차지",
            "다음 학기 수강 신청 오픈",
            "성균관대학교, 캠퍼스 설립 기념일 행사 개최",
        ],
        Language::English => &[
            "SKKU announces new international student scholarship program",
            "Upcoming seminar: AI innovations at SKKU's Engineering Department",
            "SKKU ranks in top universities globally according to recent rankings",
            "Registration for next semester courses now open for students",
            "SKKU celebrates founding anniversary with special events on campus",
        ],
        Language::Both => &[
            "성균관대학교, 신규 국제학생 장학 프로그램 발표",
            "SKKU announces new international student scholarship program",
            "공과대학 AI 혁신 세미나 개최 예정",
            "Upcoming seminar: AI innovations at SKKU's Engineering Department",
            "성균관대학교, 최근 글로벌 대학 순위에서 상위권 차지",
        ],
    };
    items.iter().map(|s| s.to_string()).collect()
}

/// Render the numbered report: header, up to five items, a Korean-script
/// note when applicable, a timestamp, and an attribution line that depends
/// on whether anything real was extracted.
fn render_report(language: Language, raw_items: &[String]) -> String {
    let buckets = skku::bucket_by_language(raw_items);
    let selected = select_for_preference(language, &buckets);

    let (fell_back, items) = if selected.is_empty() {
        (true, fallback_headlines(language))
    } else {
        (false, selected)
    };

    let mut report = if fell_back {
        String::from(
            "Unable to retrieve real-time news from the SKKU website. \
             Here are some general SKKU topics:\n\n",
        )
    } else {
        String::from("Latest news from Sungkyunkwan University (SKKU):\n\n")
    };

    for (i, item) in items.iter().take(MAX_ITEMS).enumerate() {
        report.push_str(&format!("{}. {}\n", i + 1, item));
    }

    if skku::is_korean(&report) {
        report.push_str("\nNote: Some news items are in Korean (한국어).\n");
    }

    report.push_str(&format!(
        "\n(News fetched on {})",
        Local::now().format("%A, %B %d, %Y")
    ));

    if raw_items.is_empty() {
        report.push_str("\nPlease visit the official website for current news: https://www.skku.edu/");
    } else {
        report.push_str("\nSource: Sungkyunkwan University (SKKU)");
    }

    report
}

impl Tool for NewsTool {
    fn name(&self) -> &'static str {
        "skku_news"
    }

    fn description(&self) -> &'static str {
        "Fetch the latest news and announcements from the Sungkyunkwan University (SKKU) website"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "language": {
                    "type": "string",
                    "enum": ["korean", "english", "both"],
                    "description": "Language preference for news",
                    "default": "both"
                }
            },
            "required": []
        })
    }

    fn execute(
        &self,
        parameters: serde_json::Value,
    ) -> Pin<
        Box<
            dyn std::future::Future<Output = Result<serde_json::Value, crate::ToolError>>
                + Send
                + '_,
        >,
    > {
        Box::pin(async move {
            let params: NewsParams = match parameters {
                serde_json::Value::Null => NewsParams::default(),
                value => serde_json::from_value(value).map_err(|e| {
                    crate::ToolError::ToolExecution(format!("Invalid parameters: {}", e))
                })?,
            };

            let report = self.fetch_news(Language::parse(&params.language)).await;
            Ok(serde_json::Value::String(report))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buckets(korean: &[&str], english: &[&str]) -> LanguageBuckets {
        LanguageBuckets {
            korean: korean.iter().map(|s| s.to_string()).collect(),
            english: english.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_language_parse_normalizes() {
        assert_eq!(Language::parse("Korean"), Language::Korean);
        assert_eq!(Language::parse("  ENGLISH "), Language::English);
        assert_eq!(Language::parse("both"), Language::Both);
        assert_eq!(Language::parse("klingon"), Language::Both);
        assert_eq!(Language::parse(""), Language::Both);
    }

    #[test]
    fn test_candidate_urls_order_and_filtering() {
        let tool = NewsTool::with_base_url("https://example.test");

        let korean = tool.candidate_urls(Language::Korean);
        assert_eq!(korean.len(), 3);
        assert!(korean.iter().all(|u| u.contains("/skku/")));
        assert_eq!(korean[0], "https://example.test/skku/index.do");

        let english = tool.candidate_urls(Language::English);
        assert_eq!(english.len(), 3);
        assert!(english.iter().all(|u| u.contains("/eng/")));

        let both = tool.candidate_urls(Language::Both);
        assert_eq!(both.len(), 6);
        assert!(both[0].contains("/skku/"));
        assert!(both[3].contains("/eng/"));
    }

    #[test]
    fn test_select_korean_only() {
        let b = buckets(&["한국어 공지 하나"], &["English notice one"]);
        let selected = select_for_preference(Language::Korean, &b);
        assert_eq!(selected, vec!["한국어 공지 하나".to_string()]);
    }

    #[test]
    fn test_select_english_only() {
        let b = buckets(&["한국어 공지 하나"], &["English notice one"]);
        let selected = select_for_preference(Language::English, &b);
        assert_eq!(selected, vec!["English notice one".to_string()]);
    }

    #[test]
    fn test_both_interleaves_when_both_nonempty() {
        let b = buckets(&["한국 1", "한국 2"], &["English 1", "English 2"]);
        let selected = select_for_preference(Language::Both, &b);
        assert_eq!(
            selected,
            vec!["한국 1", "English 1", "한국 2", "English 2"]
        );
    }

    #[test]
    fn test_both_concatenates_when_one_bucket_empty() {
        let b = buckets(&[], &["English 1", "English 2"]);
        let selected = select_for_preference(Language::Both, &b);
        assert_eq!(selected, vec!["English 1", "English 2"]);
    }

    #[test]
    fn test_both_interleave_stops_near_cap() {
        let b = buckets(
            &["한국 1", "한국 2", "한국 3", "한국 4"],
            &["English 1", "English 2", "English 3", "English 4"],
        );
        let selected = select_for_preference(Language::Both, &b);
        // The merge stops after the pair that crosses five; rendering trims to five.
        assert_eq!(selected.len(), 6);
        assert_eq!(selected[0], "한국 1");
        assert_eq!(selected[1], "English 1");
    }

    #[test]
    fn test_render_real_items() {
        let raw = vec![
            "SKKU opens new AI research center".to_string(),
            "Fall semester registration guide released".to_string(),
        ];
        let report = render_report(Language::English, &raw);
        assert!(report.starts_with("Latest news from Sungkyunkwan University (SKKU):\n\n"));
        assert!(report.contains("1. SKKU opens new AI research center"));
        assert!(report.contains("2. Fall semester registration guide released"));
        assert!(report.contains("(News fetched on "));
        assert!(report.ends_with("Source: Sungkyunkwan University (SKKU)"));
        assert!(!report.contains("Note: Some news items are in Korean"));
    }

    #[test]
    fn test_render_fallback_when_nothing_extracted() {
        let report = render_report(Language::English, &[]);
        assert!(report.starts_with("Unable to retrieve real-time news from the SKKU website."));
        for (i, headline) in fallback_headlines(Language::English).iter().enumerate() {
            assert!(report.contains(&format!("{}. {}", i + 1, headline)));
        }
        assert!(report
            .ends_with("Please visit the official website for current news: https://www.skku.edu/"));
    }

    #[test]
    fn test_render_korean_note_present_for_hangul_output() {
        let report = render_report(Language::Korean, &[]);
        assert!(report.contains("Note: Some news items are in Korean (한국어)."));
    }

    #[test]
    fn test_render_never_exceeds_five_items() {
        for language in [Language::Korean, Language::English, Language::Both] {
            let report = render_report(language, &[]);
            assert!(report.contains("5. "));
            assert!(!report.contains("6. "));
        }
    }

    #[test]
    fn test_english_selection_never_contains_hangul() {
        let raw = vec![
            "성균관대학교 장학금 공지 안내".to_string(),
            "SKKU opens new AI research center".to_string(),
        ];
        let b = skku::bucket_by_language(&raw);
        let selected = select_for_preference(Language::English, &b);
        assert!(selected.iter().all(|item| !skku::is_korean(item)));
    }

    #[test]
    fn test_korean_selection_only_hangul() {
        let raw = vec![
            "성균관대학교 장학금 공지 안내".to_string(),
            "SKKU opens new AI research center".to_string(),
        ];
        let b = skku::bucket_by_language(&raw);
        let selected = select_for_preference(Language::Korean, &b);
        assert!(!selected.is_empty());
        assert!(selected.iter().all(|item| skku::is_korean(item)));
    }
}
