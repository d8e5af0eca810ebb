//! Locating the `ytInitialData` assignment inside page markup

use once_cell::sync::Lazy;
use regex::Regex;

/// The assignment target the results page embeds its data under.
const MARKER: &str = "ytInitialData";

static SCRIPT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<script[^>]*>(.*?)</script>").unwrap());

/// Non-greedy body so the earliest `};` terminator wins. The value itself
/// could in principle contain a `};` inside a string field, which would
/// truncate the match; the marker is rare enough in practice that this is
/// tolerated over a full brace-depth scanner.
static ASSIGN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)ytInitialData\s*=\s*(\{.*?\});").unwrap());

static FALLBACK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)var ytInitialData\s*=\s*(\{.*?\});</script>").unwrap());

/// Find the raw JSON text of the `ytInitialData` assignment.
///
/// Scans script regions in document order and returns the first non-empty
/// object literal assigned to the marker. If no script region matches, one
/// whole-document fallback pattern is tried. `None` is a normal outcome
/// (consent walls, layout changes) and signals the caller to short-circuit
/// with an empty result set.
pub fn locate_initial_data(html: &str) -> Option<&str> {
    for caps in SCRIPT_RE.captures_iter(html) {
        let body = match caps.get(1) {
            Some(m) => m.as_str(),
            None => continue,
        };
        if !body.contains(MARKER) {
            continue;
        }
        if let Some(m) = ASSIGN_RE.captures(body).and_then(|c| c.get(1)) {
            if !m.as_str().is_empty() {
                return Some(m.as_str());
            }
        }
    }

    FALLBACK_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}
