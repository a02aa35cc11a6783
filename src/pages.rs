//! Page composition.
//!
//! One function per page decides which components render and in what order.
//! [`render_route`] dispatches on a resolved [`RouteState`] and wraps the
//! page body in the shared [`shell`].
//!
//! | Route      | Body                                                        |
//! |------------|-------------------------------------------------------------|
//! | `/`        | Profile picture, profile text, social links, timeline (opt) |
//! | `/work`    | Work cards in content order                                 |
//! | `/blogs`   | Placeholder                                                 |
//! | `/contact` | Email link                                                  |
//! | unmatched  | Not-found message                                           |

use crate::color::ColorError;
use crate::components;
use crate::config;
use crate::content::EMAIL_PLACEHOLDER;
use crate::routes::{Page, RouteState};
use crate::site::Site;
use crate::style::StyleSheet;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/nav.js");

const WORK_CONTAINER_CSS: &str = "& { margin-top: 15%; }";

const CONTACT_CSS: &str = r#"
& .copy-email { display: inline-block; text-decoration: none; font: inherit; padding: 0.5rem 1rem; border: 1px solid var(--color-accent); border-radius: 4px; background: transparent; color: var(--color-accent); cursor: pointer; }
& .copy-email:hover { background: var(--color-accent); color: var(--color-bg); }
"#;

/// Render the page for a resolved route, unmatched routes included.
pub fn render_route(site: &Site, state: &RouteState) -> Result<Markup, ColorError> {
    let mut sheet = StyleSheet::new();
    let short_name = site.content.short_name();
    let (title, body) = match state.page() {
        Some(Page::Home) => (Page::Home.title(short_name), render_home(site, &mut sheet)?),
        Some(Page::Work) => (Page::Work.title(short_name), render_work(site, &mut sheet)),
        Some(Page::Blog) => (Page::Blog.title(short_name), render_blog()),
        Some(Page::Contact) => (
            Page::Contact.title(short_name),
            render_contact(site, &mut sheet),
        ),
        None => (
            format!("Not Found | {short_name}"),
            render_not_found(site),
        ),
    };
    Ok(shell(site, &title, state.current_path(), body, &mut sheet))
}

/// Shared document: metadata, global styles, header, footer, nav script.
///
/// Scoped styles go at the top of `<body>` so a client-side body swap brings
/// the next page's styles along with its markup.
pub fn shell(
    site: &Site,
    title: &str,
    current_path: &str,
    body: Markup,
    sheet: &mut StyleSheet,
) -> Markup {
    let header = components::header(site.content.nav(), current_path, sheet);
    let footer = components::footer(&site.config.footer, sheet);
    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&site.config.colors),
        CSS_STATIC
    );
    let font = &site.config.font_stylesheet;

    html! {
        (DOCTYPE)
        html lang=(site.config.lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="initial-scale=1.0, width=device-width";
                title { (title) }
                @if !font.is_empty() {
                    link href=(font) rel="stylesheet";
                }
                link rel="icon" href="/favicon.ico";
                style { (PreEscaped(css)) }
            }
            body {
                (sheet.render())
                div.custom-container {
                    (header)
                    main { (body) }
                    (footer)
                }
                script { (PreEscaped(JS)) }
            }
        }
    }
}

fn render_home(site: &Site, sheet: &mut StyleSheet) -> Result<Markup, ColorError> {
    let content = &site.content;
    let profile = content.profile();

    let mut paragraphs = Vec::with_capacity(profile.paragraphs.len());
    for paragraph in &profile.paragraphs {
        paragraphs.push(components::profile_paragraph(
            paragraph,
            |link| content.anchor_for(link),
            sheet,
        ));
    }
    let social = components::social_links(content.social(), &site.config.social, sheet)?;
    let timeline = if site.config.home.show_timeline {
        Some(components::timeline(content.timeline(), site.locale(), sheet))
    } else {
        None
    };

    Ok(html! {
        div.layout-header {
            div.layout-content {
                div.wrapper {
                    div.layout-container {
                        div.center-layout-container {
                            @if let Some(image) = &profile.image {
                                div.center-layout-image {
                                    img.profile-icon src=(image) alt=(content.site_name());
                                }
                            }
                            div.center-layout-text {
                                @for paragraph in &paragraphs { (paragraph) }
                            }
                            (social)
                        }
                    }
                }
            }
        }
        @if let Some(timeline) = timeline {
            div.layout-body { (timeline) }
        }
    })
}

fn render_work(site: &Site, sheet: &mut StyleSheet) -> Markup {
    let scope = sheet.scope(WORK_CONTAINER_CSS);
    let mut cards = Vec::with_capacity(site.content.work().len());
    for entry in site.content.work() {
        cards.push(components::work_card(entry, sheet));
    }
    html! {
        div class={ "work-container " (scope) } {
            @for card in &cards { (card) }
        }
    }
}

fn render_blog() -> Markup {
    html! {
        h1 { "Blogs" }
        p { "This is the blogs page" }
    }
}

/// The email never appears in plain form: the link carries the obfuscated
/// address and the nav script writes the `mailto:` target into its `href`
/// when it is clicked.
fn render_contact(site: &Site, sheet: &mut StyleSheet) -> Markup {
    let scope = sheet.scope(CONTACT_CSS);
    html! {
        div class={ "contact " (scope) } {
            h1 { "Contact" }
            p { "The quickest way to reach me is email." }
            a.copy-email href=(site.router.path_of(Page::Contact))
                data-email=(site.content.email())
                data-placeholder=(EMAIL_PLACEHOLDER) {
                "Email me"
            }
        }
    }
}

fn render_not_found(site: &Site) -> Markup {
    html! {
        h1 { "404" }
        p { "This page could not be found." }
        a href=(site.router.path_of(Page::Home)) data-route { "Go home" }
    }
}
