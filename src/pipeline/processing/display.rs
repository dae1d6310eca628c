use serde::Serialize;

use crate::common::constants::{
    BUDGET_PLACEHOLDER, CURRENCY_SUFFIX, DEFAULT_SECTOR_COLOR, SATELLITE_EXPORT_URL, SATELLITE_HEIGHT_PX,
    SATELLITE_LAT_OFFSET, SATELLITE_LON_OFFSET, SATELLITE_WIDTH_PX, SECTOR_COLORS, THOUSANDS_SEPARATOR,
};
use crate::common::types::RawRecord;

/// Map marker color for a sector
pub fn sector_color(sector: &str) -> &'static str {
    SECTOR_COLORS
        .iter()
        .find(|(name, _)| *name == sector)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_SECTOR_COLOR)
}

/// Satellite thumbnail around the record's `geo_point_2d`, or `None` when
/// either coordinate is missing.
pub fn satellite_url(record: &RawRecord) -> Option<String> {
    let point = record.geo_point()?;
    let xmin = point.lon - SATELLITE_LON_OFFSET;
    let xmax = point.lon + SATELLITE_LON_OFFSET;
    let ymin = point.lat - SATELLITE_LAT_OFFSET;
    let ymax = point.lat + SATELLITE_LAT_OFFSET;
    Some(format!(
        "{SATELLITE_EXPORT_URL}?bbox={xmin},{ymin},{xmax},{ymax}&bboxSR=4326&size={SATELLITE_WIDTH_PX},{SATELLITE_HEIGHT_PX}&f=image"
    ))
}

/// Formats the record's `budget` as French-grouped euros (`1 200 000 €`).
///
/// Spaces inside the raw value are ignored and the leading integer is used;
/// a missing or unreadable budget gives the placeholder dash.
pub fn format_budget(record: &RawRecord) -> String {
    let Some(raw) = record.budget() else {
        return BUDGET_PLACEHOLDER.to_string();
    };
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    match parse_leading_integer(&compact) {
        Some(amount) => format!("{}{CURRENCY_SUFFIX}", group_thousands(amount)),
        None => BUDGET_PLACEHOLDER.to_string(),
    }
}

fn parse_leading_integer(s: &str) -> Option<i64> {
    let sign_len = usize::from(s.starts_with(['-', '+']));
    let end = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |idx| idx + sign_len);
    s[..end].parse().ok()
}

fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(c);
    }
    out
}

/// Display-only values for a project card or map popup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayFields {
    #[serde(rename = "_color", skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(rename = "_budget")]
    pub budget: String,
    #[serde(rename = "_satelliteUrl")]
    pub satellite_url: Option<String>,
}

impl DisplayFields {
    /// `sector_field` names the record field holding the sector, when the
    /// caller wants a marker color.
    pub fn for_record(record: &RawRecord, sector_field: Option<&str>) -> Self {
        let color = sector_field.map(|field| {
            record
                .text(field)
                .map(|sector| sector_color(sector.trim()))
                .unwrap_or(DEFAULT_SECTOR_COLOR)
        });
        Self {
            color,
            budget: format_budget(record),
            satellite_url: satellite_url(record),
        }
    }
}
