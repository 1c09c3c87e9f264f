//! Heuristic article detection over a parsed HTML document.
//!
//! Candidate blocks are found by a fixed sequence of CSS passes, each run over
//! the whole document. Passes overlap, so the same block can be visited more
//! than once; the per-call set of seen headlines is the only deduplication.

pub mod dom;
pub mod navigation;

use std::collections::HashSet;

use lazy_static::lazy_static;
use pulse_core::Article;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use dom::Matcher;
pub use navigation::is_navigation_text;

pub const MIN_HEADLINE_CHARS: usize = 10;
pub const MAX_HEADLINE_CHARS: usize = 200;

/// Candidate passes, in priority order.
const CANDIDATE_SELECTORS: &[&str] = &[
    "article",
    "[class*='article']",
    "[class*='story']",
    "[class*='story-block']",
    "[class*='post']",
    "[class*='content-item']",
    "[class*='news-item']",
    "[class*='story-card']",
    "[class*='fc-item']",
    "[class*='card'][class*='story']",
    "[class*='dcr-'][class*='card']",
    "li[class*='fc-slice__item']",
];

const HEADLINE_MATCHERS: &[Matcher] = &[
    Matcher::Tag("h1"),
    Matcher::Tag("h2"),
    Matcher::Tag("h3"),
    Matcher::Tag("h4"),
    Matcher::ClassContains("headline"),
    Matcher::ClassContains("title"),
];

const SUMMARY_MATCHERS: &[Matcher] = &[
    Matcher::ClassContains("summary"),
    Matcher::ClassContains("description"),
    Matcher::ClassContains("excerpt"),
    Matcher::ClassContains("standfirst"),
    Matcher::ClassContains("intro"),
];

/// Paragraphs under these never serve as a fallback summary.
const EXCLUDED_PARAGRAPH_ANCESTORS: &[Matcher] = &[
    Matcher::ClassContains("comment"),
    Matcher::ClassContains("meta"),
];

struct CandidatePass {
    css: &'static str,
    selector: Selector,
}

lazy_static! {
    static ref CANDIDATE_PASSES: Vec<CandidatePass> = CANDIDATE_SELECTORS
        .iter()
        .filter_map(|css| match Selector::parse(css) {
            Ok(selector) => Some(CandidatePass { css, selector }),
            Err(e) => {
                warn!("Failed to parse candidate selector '{}': {:?}", css, e);
                None
            }
        })
        .collect();
}

/// Extracts headline/summary pairs from `html`.
///
/// Never fails: malformed markup is parsed best-effort and simply yields fewer
/// (or zero) articles. Output follows pass order, then document order.
pub fn extract_articles(html: &str) -> Vec<Article> {
    let document = Html::parse_document(html);
    let mut seen: HashSet<String> = HashSet::new();
    let mut articles = Vec::new();

    for pass in CANDIDATE_PASSES.iter() {
        let mut candidates = 0usize;
        let mut accepted = 0usize;

        for node in document.select(&pass.selector) {
            candidates += 1;
            let Some(headline) = headline_of(node) else {
                continue;
            };
            if !is_acceptable_headline(&headline) || seen.contains(&headline) {
                continue;
            }

            let summary = summary_of(node);
            seen.insert(headline.clone());
            articles.push(Article { headline, summary });
            accepted += 1;
        }

        debug!(selector = pass.css, candidates, accepted, "candidate pass");
    }

    debug!(articles = articles.len(), "extraction finished");
    articles
}

/// Length bounds and the navigation-text filter; uniqueness is checked separately.
pub fn is_acceptable_headline(headline: &str) -> bool {
    let chars = headline.chars().count();
    !headline.is_empty()
        && (MIN_HEADLINE_CHARS..=MAX_HEADLINE_CHARS).contains(&chars)
        && !is_navigation_text(headline)
}

fn headline_of(node: ElementRef) -> Option<String> {
    dom::find_first(node, HEADLINE_MATCHERS).map(dom::flat_text)
}

fn summary_of(node: ElementRef) -> String {
    dom::find_descendant(node, |element| {
        SUMMARY_MATCHERS.iter().any(|m| m.matches(element)) || is_summary_paragraph(element)
    })
    .map(dom::flat_text)
    .unwrap_or_default()
}

fn is_summary_paragraph(element: &ElementRef) -> bool {
    Matcher::Tag("p").matches(element)
        && !EXCLUDED_PARAGRAPH_ANCESTORS
            .iter()
            .any(|m| dom::has_ancestor(element, *m))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headlines(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.headline.as_str()).collect()
    }

    #[test]
    fn test_all_selectors_parse() {
        assert_eq!(CANDIDATE_PASSES.len(), CANDIDATE_SELECTORS.len());
    }

    #[test]
    fn test_single_article_element() {
        let html = "<article><h2>Government Announces New Climate Policy</h2>\
                    <p>The government announced a new climate policy today to cut emissions.</p></article>";
        let articles = extract_articles(html);

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].headline, "Government Announces New Climate Policy");
        assert_eq!(
            articles[0].summary,
            "The government announced a new climate policy today to cut emissions."
        );
    }

    #[test]
    fn test_empty_and_garbage_input() {
        assert!(extract_articles("").is_empty());
        assert!(extract_articles("<<<>>> </div></article><h2").is_empty());
        assert!(extract_articles("plain text with no markup at all").is_empty());
    }

    #[test]
    fn test_unclosed_tags_still_extract() {
        let html = "<article><h3>Floods force evacuations in the valley</h3><p>Thousands moved overnight";
        let articles = extract_articles(html);
        assert_eq!(headlines(&articles), vec!["Floods force evacuations in the valley"]);
        assert_eq!(articles[0].summary, "Thousands moved overnight");
    }

    #[test]
    fn test_navigation_text_rejected() {
        let html = r#"
            <div class="nav"><a>Sign In</a></div>
            <div class="post"><h2 class="title">Sign in to read the full report</h2></div>
            <div class="post"><h2>Subscribe for unlimited access</h2></div>
            <div class="post"><h2>Council approves new cycle lanes</h2></div>
        "#;
        let articles = extract_articles(html);
        assert_eq!(headlines(&articles), vec!["Council approves new cycle lanes"]);
    }

    #[test]
    fn test_headline_length_bounds() {
        let long = "x".repeat(MAX_HEADLINE_CHARS + 1);
        let exact = "y".repeat(MAX_HEADLINE_CHARS);
        let html = format!(
            "<article><h2>Too short</h2></article>\
             <article><h2>{}</h2></article>\
             <article><h2>{}</h2></article>\
             <article><h2>Ten chars!</h2></article>",
            long, exact
        );
        let articles = extract_articles(&html);
        assert_eq!(headlines(&articles), vec![exact.as_str(), "Ten chars!"]);
    }

    #[test]
    fn test_headline_length_counts_characters() {
        // 10 characters in 13 bytes, then 9 characters in 11 bytes
        let html = "<article><h2>Élan à Zür</h2></article><article><h2>Café über</h2></article>";
        let articles = extract_articles(html);
        assert_eq!(headlines(&articles), vec!["Élan à Zür"]);
    }

    #[test]
    fn test_overlapping_passes_deduplicate_by_headline() {
        // matched by "article", "[class*='article']", "[class*='story']" and the card pass
        let html = r#"
            <article class="article story-card">
                <h2>Rail strike called off after late talks</h2>
                <div class="summary">Unions accepted a revised offer.</div>
            </article>
        "#;
        let articles = extract_articles(html);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].summary, "Unions accepted a revised offer.");
    }

    #[test]
    fn test_same_headline_in_different_blocks_kept_once() {
        let html = r#"
            <article><h2>Storm warning issued for the coast</h2><p>First copy.</p></article>
            <div class="news-item"><h3>Storm warning issued for the coast</h3><p>Second copy.</p></div>
        "#;
        let articles = extract_articles(html);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].summary, "First copy.");
    }

    #[test]
    fn test_output_follows_pass_order() {
        let html = r#"
            <div class="story"><h2>Second pass headline here</h2></div>
            <article><h2>First pass headline here</h2></article>
        "#;
        let articles = extract_articles(html);
        assert_eq!(
            headlines(&articles),
            vec!["First pass headline here", "Second pass headline here"]
        );
    }

    #[test]
    fn test_headline_by_class_in_document_order() {
        let html = r#"
            <div class="content-item">
                <span class="card-headline">Museum reopens after restoration</span>
                <h1>Section heading that comes later</h1>
            </div>
        "#;
        let articles = extract_articles(html);
        assert_eq!(headlines(&articles), vec!["Museum reopens after restoration"]);
    }

    #[test]
    fn test_summary_prefers_first_match_in_document_order() {
        let html = r#"
            <article>
                <h2>Budget surplus beats forecasts</h2>
                <p>Opening paragraph comes first.</p>
                <div class="standfirst">Standfirst comes second.</div>
            </article>
        "#;
        let articles = extract_articles(html);
        assert_eq!(articles[0].summary, "Opening paragraph comes first.");
    }

    #[test]
    fn test_summary_skips_comment_and_meta_paragraphs() {
        let html = r#"
            <article>
                <h2>Hospital waiting lists fall again</h2>
                <div class="article-meta"><p>By Staff Reporter</p></div>
                <div class="comments"><p>Great news!</p></div>
                <p>Figures show the shortest waits since 2019.</p>
            </article>
        "#;
        let articles = extract_articles(html);
        assert_eq!(articles[0].summary, "Figures show the shortest waits since 2019.");
    }

    #[test]
    fn test_missing_summary_is_empty() {
        let html = "<article><h2>Orchestra announces winter season</h2></article>";
        let articles = extract_articles(html);
        assert_eq!(articles[0].summary, "");
    }

    #[test]
    fn test_cms_card_and_slice_items() {
        let html = r#"
            <ul>
              <li class="fc-slice__item"><a><span class="js-headline-text">Ferry services suspended in high winds</span></a></li>
            </ul>
            <div class="dcr-1x2y3z card-wrapper"><h3>Energy bills to rise in spring</h3></div>
        "#;
        let articles = extract_articles(html);
        assert_eq!(
            headlines(&articles),
            vec!["Energy bills to rise in spring", "Ferry services suspended in high winds"]
        );
    }

    #[test]
    fn test_entities_decoded() {
        let html = "<article><h2>Profits &amp; losses: a &quot;mixed&quot; year</h2></article>";
        let articles = extract_articles(html);
        assert_eq!(articles[0].headline, "Profits & losses: a \"mixed\" year");
    }

    #[test]
    fn test_headlines_are_unique_and_bounded() {
        let html = r#"
            <article><h2>Repeated headline for testing</h2></article>
            <article><h2>Repeated headline for testing</h2></article>
            <div class="post"><h2>Repeated headline for testing</h2></div>
            <div class="story"><h4>Another distinct headline</h4></div>
            <div class="story"><h4>Short</h4></div>
        "#;
        let articles = extract_articles(html);
        let unique: HashSet<&str> = articles.iter().map(|a| a.headline.as_str()).collect();
        assert_eq!(unique.len(), articles.len());
        for article in &articles {
            let n = article.headline.chars().count();
            assert!((MIN_HEADLINE_CHARS..=MAX_HEADLINE_CHARS).contains(&n));
        }
    }
}
