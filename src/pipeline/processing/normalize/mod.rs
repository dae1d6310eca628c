//! Pure normalizers turning noisy free-text fields into canonical labels.
//!
//! None of these fail: missing or malformed input maps to `None` and unknown
//! values fall back to a fixed label or to the trimmed input.

use unicode_normalization::UnicodeNormalization;

pub mod arrondissement;
pub mod construction;
pub mod service;

pub use arrondissement::{arrondissement_from_postal_code, get_arrondissement};
pub use construction::{normalize_construction, ConstructionGroup};
pub use service::normalize_service;

/// Lower-cases, strips accents (NFD minus combining marks), collapses
/// whitespace runs to a single space and trims.
pub fn fold_text(raw: &str) -> String {
    let stripped: String = raw
        .to_lowercase()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
