//! CLI output formatting for `check` and `build`.
//!
//! # Information-First Display
//!
//! Output is an inventory of the site, not of files. Each entity leads with
//! its positional index and title; routes, links, and output paths follow as
//! indented context lines.
//!
//! ## Check
//!
//! ```text
//! Site
//!     Joel Hanson (JoelHanson)
//!     Contact: mailto:joelhanson025@gmail.com
//!
//! Navigation
//! 001 Home → / (left)
//! 002 Work → /work
//!
//! Work
//! 001 March 2020 Kafka Connect
//!     GitHub: https://github.com/...
//!
//! Social
//! 001 GitHub
//!     https://github.com/joel-hanson
//!
//! Timeline
//! 001 2020-03-15 Start (pinned)
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! Work → work/index.html
//! Not Found → 404.html
//!
//! Generated 5 pages, copied 3 assets
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::content::{NavPosition, mailto_uri};
use crate::generate::GenerateReport;
use crate::site::Site;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format the content inventory shown by `folio check`.
pub fn format_check_output(site: &Site) -> Vec<String> {
    let content = &site.content;
    let mut lines = vec![
        "Site".to_string(),
        format!("    {} ({})", content.site_name(), content.short_name()),
        format!("    Contact: {}", mailto_uri(content.email())),
    ];

    lines.push(String::new());
    lines.push("Navigation".to_string());
    for (i, entry) in content.nav().iter().enumerate() {
        let side = match entry.position {
            NavPosition::Left => " (left)",
            NavPosition::Right => "",
        };
        lines.push(format!(
            "{} {} \u{2192} {}{}",
            format_index(i + 1),
            entry.title,
            entry.link,
            side
        ));
    }

    if !content.work().is_empty() {
        lines.push(String::new());
        lines.push("Work".to_string());
        for (i, entry) in content.work().iter().enumerate() {
            lines.push(format!(
                "{} {} {} {}",
                format_index(i + 1),
                entry.month,
                entry.year,
                entry.title
            ));
            if let Some(url) = entry.github_url() {
                lines.push(format!("    GitHub: {url}"));
            }
            if let Some(url) = entry.website_url() {
                lines.push(format!("    Website: {url}"));
            }
        }
    }

    if !content.social().is_empty() {
        lines.push(String::new());
        lines.push("Social".to_string());
        for (i, entry) in content.social().iter().enumerate() {
            lines.push(format!("{} {}", format_index(i + 1), entry.name));
            lines.push(format!("    {}", entry.link));
        }
    }

    if !content.timeline().is_empty() {
        lines.push(String::new());
        let shown = if site.config.home.show_timeline {
            ""
        } else {
            " (hidden)"
        };
        lines.push(format!("Timeline{shown}"));
        for (i, entry) in content.timeline().iter().enumerate() {
            let pinned = if entry.pinned { " (pinned)" } else { "" };
            lines.push(format!(
                "{} {} {}{}",
                format_index(i + 1),
                entry.date,
                entry.short_title,
                pinned
            ));
        }
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_output(site: &Site) {
    for line in format_check_output(site) {
        println!("{}", line);
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format the list of pages written by a build.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();
    for generated in &report.pages {
        let label = generated.page.map_or("Not Found", |page| page.label());
        lines.push(format!(
            "{} \u{2192} {}",
            label,
            generated.file.display()
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Generated {}, copied {}",
        plural(report.pages.len(), "page"),
        plural(report.assets_copied, "asset")
    ));
    lines
}

/// Print build output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::generate::GeneratedPage;
    use crate::routes::Page;
    use crate::test_helpers::{test_site, test_site_with_config};
    use std::path::PathBuf;

    #[test]
    fn format_index_pads_to_three_digits() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn check_output_lists_site_and_contact() {
        let lines = format_check_output(&test_site());
        assert_eq!(lines[0], "Site");
        assert_eq!(lines[1], "    Test Person (Tester)");
        assert_eq!(lines[2], "    Contact: mailto:me@example.com");
    }

    #[test]
    fn check_output_lists_navigation_in_order() {
        let lines = format_check_output(&test_site());
        assert!(lines.contains(&"001 Home \u{2192} / (left)".to_string()));
        assert!(lines.contains(&"002 Work \u{2192} /work".to_string()));
        assert!(lines.contains(&"003 Email \u{2192} /contact".to_string()));
    }

    #[test]
    fn check_output_shows_only_non_empty_work_links() {
        let lines = format_check_output(&test_site());
        let first = lines.iter().position(|l| l == "001 March 2020 First job").unwrap();
        assert_eq!(lines[first + 1], "    GitHub: https://github.com/tester/first");
        assert_eq!(lines[first + 2], "002 June 2021 Second job");
        assert_eq!(lines[first + 3], "    Website: https://second.test");
    }

    #[test]
    fn check_output_marks_pinned_and_hidden_timeline() {
        let lines = format_check_output(&test_site());
        assert!(lines.contains(&"Timeline (hidden)".to_string()));
        assert!(lines.contains(&"002 2021-06-01 Pinned (pinned)".to_string()));

        let mut config = SiteConfig::default();
        config.home.show_timeline = true;
        let lines = format_check_output(&test_site_with_config(config));
        assert!(lines.contains(&"Timeline".to_string()));
    }

    #[test]
    fn generate_output_lists_pages_and_totals() {
        let report = GenerateReport {
            pages: vec![
                GeneratedPage {
                    page: Some(Page::Home),
                    route: "/".to_string(),
                    file: PathBuf::from("index.html"),
                },
                GeneratedPage {
                    page: None,
                    route: "/404".to_string(),
                    file: PathBuf::from("404.html"),
                },
            ],
            assets_copied: 1,
        };
        let lines = format_generate_output(&report);
        assert_eq!(lines[0], "Home \u{2192} index.html");
        assert_eq!(lines[1], "Not Found \u{2192} 404.html");
        assert_eq!(lines.last().unwrap(), "Generated 2 pages, copied 1 asset");
    }
}
