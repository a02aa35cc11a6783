//! Presentational components.
//!
//! Each component is a function from a content record (plus the few config
//! values it needs) to [`Markup`]. Components never read the content store
//! themselves; pages hand them exactly the records they render.
//!
//! Component CSS is written with `&` standing for the component root and is
//! registered in the page's [`StyleSheet`], which returns the scope class the
//! root element must carry. See [`crate::style`].

use crate::color::{self, ColorError};
use crate::config::SocialConfig;
use crate::content::{Anchor, NavEntry, NavPosition, SocialLinkEntry, TimelineEntry, WorkEntry};
use crate::routes::{LinkState, link_state};
use crate::style::StyleSheet;
use chrono::{Locale, NaiveDate, NaiveTime};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{CowStr, Event, LinkType, Parser, Tag, html as md_html};

pub const GITHUB_ICON: &str = "/icons/github.svg";
pub const LINK_ICON: &str = "/icons/link.svg";

const HEADER_CSS: &str = r#"
& { width: 100%; }
& nav { display: flex; justify-content: flex-end; padding: 16px; }
& a { margin: 12px; color: var(--color-nav-text); text-decoration: none; }
& a.active { color: var(--color-accent); }
& a.nav-left { margin-right: auto; }
"#;

const FOOTER_CSS: &str = r#"
& { text-align: left; height: 30px; width: 100%; font-size: 10px; margin: 0 12px; }
"#;

const WORK_CARD_CSS: &str = r#"
& { display: flex; margin: 10% 0; box-shadow: 0px 2px 14px 0px rgba(0, 0, 0, 0.05); transition: box-shadow 0.1s ease, transform 0.1s ease; border-radius: 10px; border: 1px solid #f3f3f3; border-top: 1px solid #ffb5b3; }
& .work-month-year { display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; height: 100%; padding: 15px; background: #fee0e0; color: var(--color-accent); }
& .work-month { font-size: 35px; }
& .title-description { flex: 1; padding: 16px; color: #484d4e; }
& .work-title { font-size: 32px; font-weight: 300; }
& .work-icons { float: right; }
& .icon-container { margin: 0 6px; display: inline-block; }
& .work-description { line-height: 1.6; overflow-wrap: break-word; hyphens: auto; }
"#;

const TIMELINE_CSS: &str = r#"
& { position: relative; display: inline-block; height: inherit; overflow: auto; }
& .timeline { line-height: 1.4em; list-style: none; margin: 0; padding: 0; width: 100%; }
& .timeline-item { padding-left: 40px; position: relative; }
& .timeline-info { font-size: 12px; font-weight: 700; letter-spacing: 3px; margin: 0 0 0.5em 0; text-transform: uppercase; white-space: nowrap; }
& .timeline-marker { position: absolute; top: 0; bottom: 0; left: 0; width: 15px; }
& .timeline-marker:before { background: #ff6b6b; border: 3px solid transparent; border-radius: 100%; content: ""; display: block; position: absolute; top: 4px; left: 0; height: 10px; width: 10px; transition: background 0.3s ease-in-out, border 0.3s ease-in-out; }
& .timeline-marker:after { content: ""; width: 3px; background: #ccd5db; display: block; position: absolute; top: 24px; bottom: 0; left: 7px; }
& .timeline-item:hover .timeline-marker:before { background: transparent; border: 3px solid #ff6b6b; }
& .timeline-item.pinned .timeline-marker:before { background: var(--color-accent); }
& .timeline-content { padding-bottom: 40px; }
& .timeline-title { line-height: inherit; }
"#;

// ============================================================================
// Header / nav
// ============================================================================

/// A single nav link, highlighted when it points at `current`.
///
/// The `data-route` attribute marks it for client-side navigation.
pub fn nav_link(entry: &NavEntry, current: &str) -> Markup {
    let active = link_state(current, &entry.link) == LinkState::Active;
    let mut class = String::from("nav-link");
    if entry.position == NavPosition::Left {
        class.push_str(" nav-left");
    }
    if active {
        class.push_str(" active");
    }
    html! {
        a class=(class) href=(entry.link) data-route aria-current=[active.then_some("page")] {
            (entry.title)
        }
    }
}

/// Site header. Left-positioned entries come first, then the rest, each
/// group in content order.
pub fn header(entries: &[NavEntry], current: &str, sheet: &mut StyleSheet) -> Markup {
    let scope = sheet.scope(HEADER_CSS);
    let left = entries.iter().filter(|e| e.position == NavPosition::Left);
    let right = entries.iter().filter(|e| e.position == NavPosition::Right);
    html! {
        header class={ "header " (scope) } {
            nav.nav {
                @for entry in left.chain(right) {
                    (nav_link(entry, current))
                }
            }
        }
    }
}

pub fn footer(title: &str, sheet: &mut StyleSheet) -> Markup {
    if title.is_empty() {
        return html! {};
    }
    let scope = sheet.scope(FOOTER_CSS);
    html! {
        footer class={ "footer " (scope) } {
            span { (title) }
        }
    }
}

// ============================================================================
// Social links
// ============================================================================

/// One social link. Every link after the first is spaced from its
/// predecessor; the hover color is a translucent version of the entry's color.
pub fn social_link(
    entry: &SocialLinkEntry,
    index: usize,
    social: &SocialConfig,
    sheet: &mut StyleSheet,
) -> Result<Markup, ColorError> {
    let hover = color::hex_to_rgba(&entry.hover_color, social.hover_opacity)?;
    let mut css = String::new();
    if index > 0 {
        css.push_str(&format!("& {{ margin-left: {}; }}\n", social.spacing));
    }
    css.push_str(&format!("&:hover {{ color: {hover}; }}\n"));
    let scope = sheet.scope(&css);
    Ok(html! {
        a class={ "media-link " (scope) } href=(entry.link) { (entry.name) }
    })
}

pub fn social_links(
    entries: &[SocialLinkEntry],
    social: &SocialConfig,
    sheet: &mut StyleSheet,
) -> Result<Markup, ColorError> {
    let links = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| social_link(entry, i, social, sheet))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(html! {
        div.center-layout-link-container {
            @for link in &links { (link) }
        }
    })
}

// ============================================================================
// Work cards
// ============================================================================

fn icon(href: &str, src: &str, alt: &str) -> Markup {
    html! {
        a.icon-container href=(href) {
            img src=(src) alt=(alt) height="16";
        }
    }
}

/// A work history card. Icons only render for non-empty URLs; the
/// description is never truncated.
pub fn work_card(entry: &WorkEntry, sheet: &mut StyleSheet) -> Markup {
    let scope = sheet.scope(WORK_CARD_CSS);
    html! {
        article class={ "work-card " (scope) } {
            div.work-month-year {
                span.work-month { (entry.month) }
                div.work-year { (entry.year) }
            }
            div.title-description {
                span.work-title { (entry.title) }
                span.work-icons {
                    @if let Some(url) = entry.github_url() {
                        (icon(url, GITHUB_ICON, "github"))
                    }
                    @if let Some(url) = entry.website_url() {
                        (icon(url, LINK_ICON, "link"))
                    }
                }
                p.work-description { (entry.description) }
            }
        }
    }
}

// ============================================================================
// Timeline
// ============================================================================

const EN_US_LONG_DATE: &str = "%A, %B %-d, %Y";

/// Long-form date patterns. Names come from the locale; word order and
/// punctuation come from here.
const LONG_DATE_PATTERNS: &[(Locale, &str)] = &[
    (Locale::en_US, EN_US_LONG_DATE),
    (Locale::en_GB, "%A %-d %B %Y"),
    (Locale::fr_FR, "%A %-d %B %Y"),
    (Locale::de_DE, "%A, %-d. %B %Y"),
    (Locale::es_ES, "%A, %-d de %B de %Y"),
    (Locale::it_IT, "%A %-d %B %Y"),
    (Locale::nl_NL, "%A %-d %B %Y"),
    (Locale::pt_BR, "%A, %-d de %B de %Y"),
    (Locale::ja_JP, "%Y年%-m月%-d日 %A"),
];

/// The long-form date pattern for `locale`, if folio has one.
pub fn long_date_pattern(locale: Locale) -> Option<&'static str> {
    LONG_DATE_PATTERNS
        .iter()
        .find(|(l, _)| *l == locale)
        .map(|(_, pattern)| *pattern)
}

/// Long-form date: weekday, full month name, day, year, in the locale's
/// own order.
///
/// The locale is explicit, so output never depends on the host's settings.
/// Config validation only admits locales from [`long_date_pattern`]; any
/// other locale gets the en_US order.
pub fn format_long_date(date: NaiveDate, locale: Locale) -> String {
    let pattern = long_date_pattern(locale).unwrap_or(EN_US_LONG_DATE);
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized(pattern, locale)
        .to_string()
}

pub fn timeline_entry(entry: &TimelineEntry, locale: Locale) -> Markup {
    let class = if entry.pinned {
        "timeline-item pinned"
    } else {
        "timeline-item"
    };
    html! {
        li class=(class) {
            div.timeline-info {
                time datetime=(entry.date.format("%Y-%m-%d").to_string()) {
                    (format_long_date(entry.date, locale))
                }
            }
            div.timeline-marker {}
            div.timeline-content {
                h3.timeline-title { (entry.short_title) }
                p { (entry.description) }
            }
        }
    }
}

/// The timeline, in content order. Pinned entries are styled, not moved.
pub fn timeline(entries: &[TimelineEntry], locale: Locale, sheet: &mut StyleSheet) -> Markup {
    let scope = sheet.scope(TIMELINE_CSS);
    html! {
        div class={ "timeline-container " (scope) } {
            ul.timeline {
                @for entry in entries {
                    (timeline_entry(entry, locale))
                }
            }
        }
    }
}

// ============================================================================
// Profile text
// ============================================================================

fn anchor_css(anchor: &Anchor) -> String {
    format!(
        "& {{ color: {}; background: {}; text-decoration: underline; }}",
        anchor.color, anchor.background
    )
}

/// Attribute-escaped text, via maud's escaping.
fn escape_attr(value: &str) -> String {
    html! { (value) }.into_string()
}

/// Opening `<a>` tag for a link with anchor styling. Mirrors what
/// pulldown-cmark writes for the same link, plus the scope class.
fn styled_link_open(link_type: LinkType, dest_url: &str, title: &str, scope: &str) -> String {
    let href = match link_type {
        LinkType::Email => format!("mailto:{dest_url}"),
        _ => dest_url.to_string(),
    };
    let mut tag = format!(r#"<a href="{}""#, escape_attr(&href));
    if !title.is_empty() {
        tag.push_str(&format!(r#" title="{}""#, escape_attr(title)));
    }
    tag.push_str(&format!(r#" class="anchor {scope}">"#));
    tag
}

/// Render one markdown paragraph of profile text.
///
/// Links whose destination has an [`Anchor`] entry get its colors through a
/// scoped class; other links are left to pulldown-cmark.
pub fn profile_paragraph<'a>(
    markdown: &str,
    anchor_for: impl Fn(&str) -> Option<&'a Anchor>,
    sheet: &mut StyleSheet,
) -> Markup {
    let events = Parser::new(markdown).map(|event| match event {
        Event::Start(Tag::Link {
            link_type,
            ref dest_url,
            ref title,
            ..
        }) => match anchor_for(dest_url) {
            Some(anchor) => {
                let scope = sheet.scope(&anchor_css(anchor));
                let tag = styled_link_open(link_type, dest_url, title, &scope);
                Event::Html(CowStr::from(tag))
            }
            None => event,
        },
        other => other,
    });
    let mut body = String::new();
    md_html::push_html(&mut body, events);
    html! {
        div.main-text { (PreEscaped(body)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{nav_entry, social_entry, work_entry};

    #[test]
    fn nav_link_active_on_own_route() {
        let entry = nav_entry("Work", "/work", NavPosition::Right);
        let html = nav_link(&entry, "/work").into_string();
        assert!(html.contains("active"));
        assert!(html.contains(r#"aria-current="page""#));
        assert!(html.contains("data-route"));
    }

    #[test]
    fn nav_link_inactive_elsewhere() {
        let entry = nav_entry("Work", "/work", NavPosition::Right);
        let html = nav_link(&entry, "/").into_string();
        assert!(!html.contains("active"));
        assert!(!html.contains("aria-current"));
    }

    #[test]
    fn nav_link_with_empty_target_never_active() {
        let entry = nav_entry("Nowhere", "", NavPosition::Right);
        assert!(!nav_link(&entry, "").into_string().contains("active"));
    }

    #[test]
    fn header_puts_left_entries_first() {
        let entries = vec![
            nav_entry("Work", "/work", NavPosition::Right),
            nav_entry("Home", "/", NavPosition::Left),
            nav_entry("Email", "/contact", NavPosition::Right),
        ];
        let mut sheet = StyleSheet::new();
        let html = header(&entries, "/", &mut sheet).into_string();
        let home = html.find("Home").unwrap();
        let work = html.find("Work").unwrap();
        let email = html.find("Email").unwrap();
        assert!(home < work && work < email);
        assert!(html.contains("nav-left"));
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn empty_footer_renders_nothing() {
        let mut sheet = StyleSheet::new();
        assert_eq!(footer("", &mut sheet).into_string(), "");
        assert!(sheet.is_empty());
        assert!(footer("Built with Rust", &mut sheet).into_string().contains("Built with Rust"));
    }

    #[test]
    fn first_social_link_has_no_margin() {
        let social = SocialConfig::default();
        let mut sheet = StyleSheet::new();
        social_link(&social_entry("GitHub", "#24292e"), 0, &social, &mut sheet).unwrap();
        let css = sheet.render().into_string();
        assert!(!css.contains("margin-left"));
        assert!(css.contains("color:rgba(36,41,46,0.8)"));
    }

    #[test]
    fn second_social_link_is_spaced() {
        let social = SocialConfig::default();
        let mut sheet = StyleSheet::new();
        social_link(&social_entry("Twitter", "#1DA1F2"), 1, &social, &mut sheet).unwrap();
        let css = sheet.render().into_string();
        assert!(css.contains("margin-left:1.5rem"));
        assert!(css.contains("color:rgba(29,161,242,0.8)"));
    }

    #[test]
    fn social_link_rejects_bad_hover_color() {
        let social = SocialConfig::default();
        let mut sheet = StyleSheet::new();
        let result = social_link(&social_entry("Bad", "#12"), 0, &social, &mut sheet);
        assert!(matches!(result, Err(ColorError::Malformed(_))));
    }

    #[test]
    fn social_links_keep_order() {
        let entries = vec![social_entry("A", "#000"), social_entry("B", "#fff")];
        let mut sheet = StyleSheet::new();
        let html = social_links(&entries, &SocialConfig::default(), &mut sheet)
            .unwrap()
            .into_string();
        assert!(html.find(">A<").unwrap() < html.find(">B<").unwrap());
    }

    #[test]
    fn work_card_without_urls_has_no_icons() {
        let mut sheet = StyleSheet::new();
        let html = work_card(&work_entry(None, None), &mut sheet).into_string();
        assert!(!html.contains(GITHUB_ICON));
        assert!(!html.contains(LINK_ICON));

        let html = work_card(&work_entry(Some(""), Some("")), &mut sheet).into_string();
        assert!(!html.contains(GITHUB_ICON));
        assert!(!html.contains(LINK_ICON));
    }

    #[test]
    fn work_card_with_both_urls_has_both_icons() {
        let mut sheet = StyleSheet::new();
        let entry = work_entry(Some("https://github.com/x"), Some("https://x.dev"));
        let html = work_card(&entry, &mut sheet).into_string();
        assert!(html.contains(GITHUB_ICON));
        assert!(html.contains(LINK_ICON));
        assert!(html.contains("https://github.com/x"));
    }

    #[test]
    fn work_card_with_one_url_has_one_icon() {
        let mut sheet = StyleSheet::new();
        let html = work_card(&work_entry(Some("https://github.com/x"), None), &mut sheet)
            .into_string();
        assert!(html.contains(GITHUB_ICON));
        assert!(!html.contains(LINK_ICON));
    }

    #[test]
    fn work_card_renders_full_description() {
        let mut entry = work_entry(None, None);
        entry.description = "word ".repeat(500);
        let mut sheet = StyleSheet::new();
        let html = work_card(&entry, &mut sheet).into_string();
        assert!(html.contains(entry.description.trim_end()));
        assert!(html.contains("March"));
        assert!(html.contains("2020"));
    }

    #[test]
    fn long_date_en_us() {
        let date = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
        assert_eq!(format_long_date(date, Locale::en_US), "Sunday, March 15, 2020");
    }

    #[test]
    fn long_date_single_digit_day_is_not_padded() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 4).unwrap();
        assert_eq!(format_long_date(date, Locale::en_US), "Monday, January 4, 2021");
    }

    #[test]
    fn long_date_follows_locale_word_order() {
        let date = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
        assert_eq!(format_long_date(date, Locale::fr_FR), "dimanche 15 mars 2020");
        assert_eq!(format_long_date(date, Locale::de_DE), "Sonntag, 15. März 2020");
        assert_eq!(format_long_date(date, Locale::ja_JP), "2020年3月15日 日曜日");
    }

    #[test]
    fn every_long_date_pattern_has_day_month_and_year() {
        for (locale, pattern) in LONG_DATE_PATTERNS {
            assert!(pattern.contains("%-d") && pattern.contains("%Y"), "{locale:?}");
            assert!(pattern.contains("%B") || pattern.contains("%-m"), "{locale:?}");
        }
        assert_eq!(long_date_pattern(Locale::zh_CN), None);
    }

    #[test]
    fn pinned_entry_is_styled_not_reordered() {
        let entries = vec![
            TimelineEntry {
                date: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
                short_title: "first".into(),
                description: "d".into(),
                pinned: false,
            },
            TimelineEntry {
                date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                short_title: "second".into(),
                description: "d".into(),
                pinned: true,
            },
        ];
        let mut sheet = StyleSheet::new();
        let html = timeline(&entries, Locale::en_US, &mut sheet).into_string();
        assert!(html.find("first").unwrap() < html.find("second").unwrap());
        assert_eq!(html.matches("timeline-item pinned").count(), 1);
    }

    #[test]
    fn profile_paragraph_styles_known_anchor() {
        let anchor = Anchor {
            link: "https://ibm.com".into(),
            color: "#0f62fe".into(),
            background: "#82cfff".into(),
        };
        let mut sheet = StyleSheet::new();
        let html = profile_paragraph(
            "I work at [IBM](https://ibm.com), see [docs](https://docs.rs).",
            |link| (link == anchor.link).then_some(&anchor),
            &mut sheet,
        )
        .into_string();
        assert!(html.contains(r#"<a href="https://ibm.com" class="anchor s-"#));
        assert!(html.contains(r#"<a href="https://docs.rs">docs</a>"#));
        assert_eq!(sheet.len(), 1);
        assert!(sheet.render().into_string().contains("color:#0f62fe"));
    }

    #[test]
    fn profile_paragraph_renders_markdown() {
        let mut sheet = StyleSheet::new();
        let html = profile_paragraph("a **Software Engineer**", |_| None, &mut sheet).into_string();
        assert!(html.contains("<strong>Software Engineer</strong>"));
        assert!(html.contains("main-text"));
    }

    #[test]
    fn profile_paragraph_keeps_email_autolinks_and_titles() {
        let mut sheet = StyleSheet::new();
        let html = profile_paragraph(
            r#"mail <me@x.com> or [r](/r "Resume")"#,
            |_| None,
            &mut sheet,
        )
        .into_string();
        assert!(html.contains(r#"<a href="mailto:me@x.com">me@x.com</a>"#));
        assert!(html.contains(r#"<a href="/r" title="Resume">r</a>"#));
        assert!(sheet.is_empty());
    }

    #[test]
    fn styled_links_keep_email_scheme_and_title() {
        let anchor = Anchor {
            link: String::new(),
            color: "#000".into(),
            background: "#fff".into(),
        };
        let mut sheet = StyleSheet::new();
        let html = profile_paragraph(
            r#"mail <me@x.com> or [r](/r "Resume & CV")"#,
            |_| Some(&anchor),
            &mut sheet,
        )
        .into_string();
        assert!(html.contains(r#"<a href="mailto:me@x.com" class="anchor s-"#));
        assert!(html.contains(r#"<a href="/r" title="Resume &amp; CV" class="anchor s-"#));
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn profile_paragraph_escapes_href() {
        let mut sheet = StyleSheet::new();
        let html = profile_paragraph("[x](https://a.b/?a=1&b=2)", |_| None, &mut sheet)
            .into_string();
        assert!(html.contains(r#"href="https://a.b/?a=1&amp;b=2""#));
    }
}
