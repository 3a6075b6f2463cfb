//! Second pass: rewrite the markers left by the first pass.
//!
//! The substitutions run in a fixed order:
//!
//! 1. `"😃` and `😃"` are deleted, unquoting each typed literal.
//! 2. `["😘"]` (the empty multiset) becomes `{}`.
//! 3. `["😘",` becomes `{`, keeping the newline the pretty printer put
//!    after the comma.
//! 4. `,"😘"]` becomes `}`, keeping the whitespace the pretty printer put
//!    before the bracket.
//! 5. `♡` becomes `"`.
//!
//! Steps 3 and 4 tolerate arbitrary whitespace around the marker element,
//! which covers both compact output and any indentation depth.

use adm_core::escape::{REMOVE_QUOTE, REPLACE_BRACES, SET_QUOTE};
use regex::Regex;
use std::sync::LazyLock;

fn compile(pattern: String) -> Regex {
    Regex::new(&pattern).unwrap_or_else(|e| panic!("invalid repair pattern {pattern:?}: {e}"))
}

fn quoted_marker(marker: char) -> String {
    format!("\"{}\"", regex::escape(&marker.to_string()))
}

static REMOVE_QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let marker = regex::escape(&REMOVE_QUOTE.to_string());
    compile(format!("\"{marker}|{marker}\""))
});

static EMPTY_MULTISET_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(format!(r"\[\s*{}\s*\]", quoted_marker(REPLACE_BRACES))));

static MULTISET_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(format!(r"\[\s*{},(\n?)", quoted_marker(REPLACE_BRACES))));

static MULTISET_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(format!(r",\s*{}(\s*)\]", quoted_marker(REPLACE_BRACES))));

/// Turn marker-laden JSON into ADM text.
pub fn repair(intermediate: &str) -> String {
    let text = REMOVE_QUOTE_RE.replace_all(intermediate, "");
    let text = EMPTY_MULTISET_RE.replace_all(&text, "{}");
    let text = MULTISET_OPEN_RE.replace_all(&text, "{${1}");
    let text = MULTISET_CLOSE_RE.replace_all(&text, "${1}}");
    text.replace(SET_QUOTE, "\"")
}
