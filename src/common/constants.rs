/// Open-data endpoint for the Paris public-works dataset
pub const API_BASE: &str =
    "https://opendata.paris.fr/api/explore/v2.1/catalog/datasets/travaux_equipements_publics/records";

/// Page size requested from the records endpoint
pub const PAGE_LIMIT: usize = 100;

// Sector colors used on the map; anything else falls back to DEFAULT_SECTOR_COLOR
pub const SECTOR_COLORS: [(&str, &str); 8] = [
    ("Petite Enfance", "#f472b6"),
    ("Éducation", "#60a5fa"),
    ("Sports", "#34d399"),
    ("Patrimoine", "#fbbf24"),
    ("Logement", "#a78bfa"),
    ("Propreté", "#fb923c"),
    ("Environnement", "#4ade80"),
    ("Culture", "#f87171"),
];
pub const DEFAULT_SECTOR_COLOR: &str = "#6366f1";

// Satellite thumbnail export
pub const SATELLITE_EXPORT_URL: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/export";
pub const SATELLITE_LON_OFFSET: f64 = 0.001;
pub const SATELLITE_LAT_OFFSET: f64 = 0.00075;
pub const SATELLITE_WIDTH_PX: u32 = 400;
pub const SATELLITE_HEIGHT_PX: u32 = 280;

/// Shown in place of a budget that is missing or unreadable
pub const BUDGET_PLACEHOLDER: &str = "—";
pub const CURRENCY_SUFFIX: &str = " €";
/// fr-FR digit group separator (narrow no-break space)
pub const THOUSANDS_SEPARATOR: char = '\u{202f}';

// Derived field names attached by the enricher
pub const ARRONDISSEMENT_FIELD: &str = "_arrondissement";
pub const CONSTRUCTION_GROUP_FIELD: &str = "_constructionGroup";
pub const SERVICE_FIELD: &str = "_service";

pub const DERIVED_FIELDS: [&str; 3] = [ARRONDISSEMENT_FIELD, CONSTRUCTION_GROUP_FIELD, SERVICE_FIELD];
