//! Accessibility analysis: image alt text, headings, document language, link text.

use std::sync::LazyLock;

use log::debug;
use scraper::{ElementRef, Html, Selector};

use super::{AnalysisOutcome, Issue, NoMetrics};
use crate::config::{
    ACCESSIBILITY_BASE_SCORE, EMPTY_LINK_MAX_PENALTY, MISSING_ALT_MAX_PENALTY, MISSING_H1_PENALTY,
    MISSING_LANG_PENALTY,
};
use crate::utils::parse_selector_unsafe;

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("img", "IMG_SELECTOR"));
static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("h1", "H1_SELECTOR"));
static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a", "LINK_SELECTOR"));

/// Scores basic accessibility markers.
///
/// Image and link penalties are proportional to the share of offending
/// elements, so the raw score is fractional; it is rounded half-up at the end.
pub fn analyze_accessibility(html: &str) -> AnalysisOutcome<NoMetrics> {
    if html.is_empty() {
        return AnalysisOutcome {
            metrics: NoMetrics {},
            score: 0,
            issues: vec![Issue::minor("No HTML fetched for accessibility.")],
        };
    }

    let document = Html::parse_document(html);
    let mut score = ACCESSIBILITY_BASE_SCORE;
    let mut issues = Vec::new();

    let images: Vec<ElementRef<'_>> = document.select(&IMG_SELECTOR).collect();
    let missing_alt = images
        .iter()
        .filter(|img| !has_non_empty_attr(img, "alt"))
        .count();
    if missing_alt > 0 {
        score -= proportional_penalty(missing_alt, images.len(), MISSING_ALT_MAX_PENALTY);
        issues.push(Issue::minor(format!(
            "{missing_alt} images missing alt attributes."
        )));
    }

    if document.select(&H1_SELECTOR).next().is_none() {
        score -= MISSING_H1_PENALTY;
        issues.push(Issue::critical("Missing heading."));
    }

    if !has_non_empty_attr(&document.root_element(), "lang") {
        score -= MISSING_LANG_PENALTY;
        issues.push(Issue::critical("Missing lang attribute on <html> tag."));
    }

    let links: Vec<ElementRef<'_>> = document.select(&LINK_SELECTOR).collect();
    let empty_links = links
        .iter()
        .filter(|link| link.text().collect::<String>().trim().is_empty())
        .count();
    if empty_links > 0 {
        score -= proportional_penalty(empty_links, links.len(), EMPTY_LINK_MAX_PENALTY);
        issues.push(Issue::minor(format!("{empty_links} links with no text.")));
    }

    let score = round_score(score);
    debug!(
        "Accessibility score {score}: {missing_alt}/{} images without alt, {empty_links}/{} empty links",
        images.len(),
        links.len()
    );
    AnalysisOutcome {
        metrics: NoMetrics {},
        score,
        issues,
    }
}

fn has_non_empty_attr(element: &ElementRef<'_>, name: &str) -> bool {
    element
        .value()
        .attr(name)
        .is_some_and(|value| !value.trim().is_empty())
}

fn proportional_penalty(offending: usize, total: usize, max_penalty: f64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    offending as f64 / total as f64 * max_penalty
}

/// Clamps to [0, 100] and rounds half-up.
fn round_score(raw: f64) -> u8 {
    (raw.clamp(0.0, 100.0) + 0.5).floor() as u8
}
