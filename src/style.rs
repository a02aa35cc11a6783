//! Scoped style blocks.
//!
//! Every component ships its own small CSS fragment. Before it reaches the
//! page, the fragment is rewritten so its selectors only match inside the
//! component's root element, which carries a generated scope class.
//!
//! ## Selector Rules
//!
//! ```text
//! &            → .s-1a2b3c4d            (the component root itself)
//! &:hover      → .s-1a2b3c4d:hover
//! & .title, p  → .s-1a2b3c4d .title, .s-1a2b3c4d p
//! @media (…) { … }   → rewritten recursively
//! @keyframes … { … } → passed through untouched
//! ```
//!
//! The scope class is derived from a SHA-256 of the raw CSS, so identical
//! fragments share a class and rebuilding the site yields identical output.

use maud::{Markup, PreEscaped, html};
use sha2::{Digest, Sha256};

/// A component stylesheet rewritten to its own scope.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopedStyle {
    class: String,
    css: String,
}

impl ScopedStyle {
    pub fn new(raw: &str) -> Self {
        let digest = Sha256::digest(raw.as_bytes());
        let hash: String = digest.iter().take(4).map(|b| format!("{b:02x}")).collect();
        let class = format!("s-{hash}");
        let css = scope_rules(raw, &format!(".{class}"));
        Self { class, css }
    }

    /// Class to put on the component's root element.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// The rewritten CSS.
    pub fn css(&self) -> &str {
        &self.css
    }
}

/// Rewrite a list of rules (`selector { body }`) so every selector is scoped.
fn scope_rules(css: &str, scope: &str) -> String {
    let mut out = String::new();
    let mut rest = css;

    while let Some(open) = rest.find('{') {
        let selector = rest[..open].trim();
        let Some(close) = matching_brace(rest, open) else {
            // Unbalanced input: keep the remainder verbatim.
            out.push_str(rest);
            return out;
        };
        let body = &rest[open + 1..close];

        if selector.starts_with("@media") || selector.starts_with("@supports") {
            out.push_str(&format!("{selector}{{{}}}\n", scope_rules(body, scope)));
        } else if selector.starts_with('@') {
            out.push_str(&format!("{selector}{{{body}}}\n"));
        } else {
            out.push_str(&format!(
                "{}{{{}}}\n",
                scope_selector_list(selector, scope),
                compact(body)
            ));
        }
        rest = &rest[close + 1..];
    }
    out
}

fn matching_brace(s: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

fn scope_selector_list(list: &str, scope: &str) -> String {
    list.split(',')
        .map(|sel| {
            let sel = sel.trim();
            if sel.contains('&') {
                sel.replace('&', scope)
            } else {
                format!("{scope} {sel}")
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Collapse declaration whitespace: `\n  color: red;\n` → `color:red;`.
fn compact(body: &str) -> String {
    declarations(body)
        .into_iter()
        .map(str::trim)
        .filter(|decl| !decl.is_empty())
        .map(|decl| match decl.split_once(':') {
            Some((prop, value)) => format!("{}:{};", prop.trim(), value.trim()),
            None => format!("{decl};"),
        })
        .collect()
}

/// Split a rule body on the `;` that end declarations. Semicolons inside
/// `(...)` or quotes, as in `url(data:image/svg+xml;base64,...)`, are kept.
fn declarations(body: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut quote = None;
    let mut start = 0;
    for (i, c) in body.char_indices() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                out.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    out.push(&body[start..]);
    out
}

/// Scoped styles collected while rendering one page.
///
/// Each scope is kept once, in first-use order, so a component rendered
/// twenty times still contributes a single block.
#[derive(Debug, Default)]
pub struct StyleSheet {
    blocks: Vec<ScopedStyle>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope `raw`, register it, and return the class for the root element.
    pub fn scope(&mut self, raw: &str) -> String {
        let style = ScopedStyle::new(raw);
        let class = style.class().to_string();
        if !self.blocks.iter().any(|b| b.class == class) {
            self.blocks.push(style);
        }
        class
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn render(&self) -> Markup {
        let css: String = self.blocks.iter().map(|b| b.css.as_str()).collect();
        html! {
            @if !css.is_empty() {
                style { (PreEscaped(css)) }
            }
        }
    }
}
