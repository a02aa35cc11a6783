//! # Folio
//!
//! A small static site generator for a single personal portfolio: a home page
//! with profile text and social links, a work list, a blog placeholder, and a
//! contact page. Content lives in one `site.toml`; presentation settings live
//! in an optional `config.toml`.
//!
//! # Architecture
//!
//! ```text
//! content/site.toml ──► ContentStore ─┐
//! content/config.toml ► SiteConfig ───┼─► Site ──► pages::render_route ──► generate (dist/)
//!                       Router ───────┘                                └─► serve (preview)
//! ```
//!
//! Everything is loaded and validated once. Rendering is then a pure function
//! of the [`site::Site`] and the resolved [`routes::RouteState`], so the static
//! build and the preview server produce identical HTML.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Typed content records, `site.toml` loading, validation, email obfuscation |
//! | [`config`] | Sparse `config.toml` merged over stock defaults, validation, color CSS |
//! | [`routes`] | Ordered route table, path resolution, active-link computation |
//! | [`components`] | Header, nav link, footer, social links, work card, timeline, profile text |
//! | [`style`] | Component-scoped CSS with content-hashed class names |
//! | [`pages`] | Per-route page composition and the shared document shell |
//! | [`color`] | Hex color parsing and translucent `rgba()` conversion |
//! | [`site`] | Loads and validates content, config, and routes together |
//! | [`generate`] | Writes every page, `404.html`, icons, and assets to the output directory |
//! | [`serve`] | Local preview server rendering pages on demand |
//! | [`output`] | CLI output formatting for `check` and `build` |
//! | [`logging`] | `env_logger` setup for the binary |
//!
//! # Design Decisions
//!
//! ## Fail at Load Time
//!
//! A navigation entry pointing at an unregistered route, a malformed hover
//! color, or an email without its `[at]` placeholder is a load error. By the
//! time anything renders, the only failure left is I/O.
//!
//! ## Maud and Scoped Styles
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), so templates are
//! type-checked and interpolation is escaped. Each component owns a small CSS
//! block whose `&` selector is rewritten to a class derived from the block's
//! hash; a page collects the blocks it used into one `<style>` element.
//!
//! ## Client-Side Navigation Without a Framework
//!
//! Every page is complete static HTML. A short script intercepts clicks on
//! internal nav links, fetches the target page, and swaps the body, so
//! navigation avoids full reloads while the site still works with scripting
//! disabled.

pub mod color;
pub mod components;
pub mod config;
pub mod content;
pub mod generate;
pub mod logging;
pub mod output;
pub mod pages;
pub mod routes;
pub mod serve;
pub mod site;
pub mod style;

#[cfg(test)]
pub(crate) mod test_helpers;
