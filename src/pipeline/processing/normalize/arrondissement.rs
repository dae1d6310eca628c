use crate::common::types::RawRecord;

/// District label for a record, derived from its `code_postal`.
pub fn get_arrondissement(record: &RawRecord) -> Option<String> {
    arrondissement_from_postal_code(record.code_postal().as_deref())
}

/// Reads the district number from the last two characters of a Paris postal
/// code (`75015` is the 15th). Returns `1er` for the first district and
/// `<n>e` for the others, `None` for anything outside 1..=20.
pub fn arrondissement_from_postal_code(code: Option<&str>) -> Option<String> {
    let code = code?.trim();
    let tail_start = code.char_indices().rev().nth(1).map(|(idx, _)| idx)?;
    let district: u8 = code[tail_start..].parse().ok()?;

    match district {
        1 => Some("1er".to_string()),
        2..=20 => Some(format!("{district}e")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> RawRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_get_arrondissement() {
        assert_eq!(get_arrondissement(&record(json!({ "code_postal": "75101" }))).as_deref(), Some("1er"));
        assert_eq!(get_arrondissement(&record(json!({ "code_postal": "75115" }))).as_deref(), Some("15e"));
        assert_eq!(get_arrondissement(&record(json!({ "code_postal": "75020" }))).as_deref(), Some("20e"));
        assert_eq!(get_arrondissement(&record(json!({ "code_postal": 75002 }))).as_deref(), Some("2e"));
    }

    #[test]
    fn test_out_of_range_or_missing() {
        assert_eq!(get_arrondissement(&record(json!({ "code_postal": "99999" }))), None);
        assert_eq!(get_arrondissement(&record(json!({ "code_postal": "75000" }))), None);
        assert_eq!(get_arrondissement(&record(json!({ "code_postal": "75021" }))), None);
        assert_eq!(get_arrondissement(&record(json!({ "code_postal": null }))), None);
        assert_eq!(get_arrondissement(&record(json!({}))), None);
    }

    #[test]
    fn test_malformed_codes() {
        assert_eq!(arrondissement_from_postal_code(Some("")), None);
        assert_eq!(arrondissement_from_postal_code(Some("5")), None);
        assert_eq!(arrondissement_from_postal_code(Some("750AB")), None);
        assert_eq!(arrondissement_from_postal_code(Some("7501é")), None);
        assert_eq!(arrondissement_from_postal_code(Some(" 75011 ")).as_deref(), Some("11e"));
    }
}
