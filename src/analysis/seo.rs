//! SEO analysis over the fetched markup and the site-file probe results.
//!
//! Scoring is additive from zero:
//! - title present (+20), title length in range (+10)
//! - meta description present (+20), description length in range (+10)
//! - exactly one `<h1>` (+10)
//! - no Open Graph tags (-20)
//!
//! robots.txt and sitemap.xml only produce issues.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use scraper::{Html, Selector};
use serde::Serialize;

use super::{clamp_score, AnalysisOutcome, Issue};
use crate::config::{
    DESCRIPTION_LENGTH_POINTS, DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS,
    DESCRIPTION_PRESENT_POINTS, MISSING_OPEN_GRAPH_PENALTY, SINGLE_H1_POINTS, TITLE_LENGTH_POINTS,
    TITLE_MAX_CHARS, TITLE_MIN_CHARS, TITLE_PRESENT_POINTS,
};
use crate::fetch::{SiteFileStatus, SiteFiles};
use crate::utils::parse_selector_unsafe;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("title", "TITLE_SELECTOR"));
static META_NAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("meta[name]", "META_NAME_SELECTOR"));
static META_PROPERTY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("meta[property]", "META_PROPERTY_SELECTOR"));
static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("h1", "H1_SELECTOR"));

static OPEN_GRAPH_PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^og:").unwrap_or_else(|e| {
        panic!("Failed to compile Open Graph regex: {e}. This is a programming error.")
    })
});

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoMetrics {
    pub title: Option<String>,
    /// Raw `content` of the description tag, untrimmed
    pub meta_description: Option<String>,
    pub h1_count: usize,
    /// Open Graph property → content; later duplicates win
    pub og_tags: BTreeMap<String, Option<String>>,
    pub robots_txt_status: SiteFileStatus,
    pub sitemap_xml_status: SiteFileStatus,
}

/// Scores on-page metadata. Metrics are absent when there is no HTML.
pub fn analyze_seo(html: &str, site_files: &SiteFiles) -> AnalysisOutcome<Option<SeoMetrics>> {
    if html.is_empty() {
        return AnalysisOutcome {
            metrics: None,
            score: 0,
            issues: vec![Issue::minor("No HTML fetched for SEO.")],
        };
    }

    let document = Html::parse_document(html);
    let mut score = 0;
    let mut issues = Vec::new();

    let title = extract_title(&document);
    match &title {
        Some(title) => {
            score += TITLE_PRESENT_POINTS;
            if (TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&title.chars().count()) {
                score += TITLE_LENGTH_POINTS;
            } else {
                issues.push(Issue::minor(
                    "Title length not optimal (10-70 characters recommended).",
                ));
            }
        }
        None => issues.push(Issue::critical("Missing <title> tag.")),
    }

    let meta_description = extract_meta_description(&document);
    match meta_description.as_deref().map(str::trim) {
        Some(description) if !description.is_empty() => {
            score += DESCRIPTION_PRESENT_POINTS;
            if (DESCRIPTION_MIN_CHARS..=DESCRIPTION_MAX_CHARS)
                .contains(&description.chars().count())
            {
                score += DESCRIPTION_LENGTH_POINTS;
            } else {
                issues.push(Issue::minor(
                    "Meta description length not optimal (50-160 characters recommended).",
                ));
            }
        }
        _ => issues.push(Issue::critical("Missing meta description.")),
    }

    let h1_count = document.select(&H1_SELECTOR).count();
    match h1_count {
        1 => score += SINGLE_H1_POINTS,
        0 => issues.push(Issue::critical("Missing heading.")),
        _ => issues.push(Issue::minor(
            "Multiple <h1> headings found. Use only one per page.",
        )),
    }

    let og_tags = extract_open_graph(&document);
    if og_tags.is_empty() {
        score -= MISSING_OPEN_GRAPH_PENALTY;
        issues.push(Issue::critical(
            "Missing Open Graph tags. These are essential for social media sharing.",
        ));
    }

    site_file_issue(
        site_files.robots_txt,
        "robots.txt file not found. This may impact search engine crawling.",
        "Could not check for robots.txt.",
        &mut issues,
    );
    site_file_issue(
        site_files.sitemap_xml,
        "sitemap.xml file not found. This is recommended for SEO.",
        "Could not check for sitemap.xml.",
        &mut issues,
    );

    debug!("SEO score {score}: title {title:?}, {h1_count} h1, {} og tags", og_tags.len());
    AnalysisOutcome {
        metrics: Some(SeoMetrics {
            title,
            meta_description,
            h1_count,
            og_tags,
            robots_txt_status: site_files.robots_txt,
            sitemap_xml_status: site_files.sitemap_xml,
        }),
        score: clamp_score(score),
        issues,
    }
}

/// Text of the first `<title>`, trimmed; `None` when absent or blank.
fn extract_title(document: &Html) -> Option<String> {
    let element = document.select(&TITLE_SELECTOR).next()?;
    let title = element.text().collect::<String>().trim().to_string();
    (!title.is_empty()).then_some(title)
}

/// `content` of the first `<meta>` whose `name` contains "description" in any case.
fn extract_meta_description(document: &Html) -> Option<String> {
    document
        .select(&META_NAME_SELECTOR)
        .find(|element| {
            element
                .value()
                .attr("name")
                .is_some_and(|name| name.to_lowercase().contains("description"))
        })
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
}

fn extract_open_graph(document: &Html) -> BTreeMap<String, Option<String>> {
    document
        .select(&META_PROPERTY_SELECTOR)
        .filter_map(|element| {
            let property = element.value().attr("property")?;
            OPEN_GRAPH_PROPERTY.is_match(property).then(|| {
                (
                    property.to_string(),
                    element.value().attr("content").map(str::to_string),
                )
            })
        })
        .collect()
}

fn site_file_issue(
    status: SiteFileStatus,
    not_found: &str,
    unchecked: &str,
    issues: &mut Vec<Issue>,
) {
    match status {
        SiteFileStatus::Found => {}
        SiteFileStatus::NotFound => issues.push(Issue::minor(not_found)),
        SiteFileStatus::Unchecked => issues.push(Issue::minor(unchecked)),
    }
}
