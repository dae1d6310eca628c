use once_cell::sync::Lazy;
use regex::Regex;

static SLA_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^SLA\s*(.+)$").expect("SLA prefix pattern is valid"));
static SLASH_SPACING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*/\s*").expect("slash spacing pattern is valid"));

/// Services that are only ever spelled as a bare acronym
const BARE_SERVICES: [&str; 3] = ["SE", "SAMO", "SLT"];

/// Canonicalizes a `service` abbreviation.
///
/// `SLA` services are rewritten to `SLA <districts>` with districts separated
/// by `/`. Anything unrecognized comes back trimmed but otherwise untouched;
/// blank input gives `None`.
pub fn normalize_service(raw: Option<&str>) -> Option<String> {
    let s = raw?.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(code) = BARE_SERVICES.iter().find(|code| s.eq_ignore_ascii_case(code)) {
        return Some(code.to_string());
    }

    let Some(caps) = SLA_PREFIX.captures(s) else {
        return Some(s.to_string());
    };

    let rest = caps[1]
        .trim()
        .trim_start_matches(['-', '/'])
        .trim()
        .replace('-', "/");
    if rest.is_empty() {
        return Some(s.to_string());
    }
    if rest.eq_ignore_ascii_case("centre") {
        return Some("SLA Centre".to_string());
    }

    let mut rest = SLASH_SPACING.replace_all(&rest, "/").into_owned();
    if rest.len() >= 3 && rest.bytes().all(|b| b.is_ascii_digit()) {
        rest = split_district_digits(&rest);
    }
    Some(format!("SLA {rest}"))
}

/// Splits a run of concatenated district numbers, e.g. `715` into `7/15`.
///
/// Two digits are taken together when they form a number in 10..=20,
/// otherwise a single digit is taken.
fn split_district_digits(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut parts: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if i + 1 < bytes.len() {
            let pair = (bytes[i] - b'0') * 10 + (bytes[i + 1] - b'0');
            if (10..=20).contains(&pair) {
                parts.push(&digits[i..i + 2]);
                i += 2;
                continue;
            }
        }
        parts.push(&digits[i..i + 1]);
        i += 1;
    }
    parts.join("/")
}
