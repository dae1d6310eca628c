use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::fold_text;

/// Canonical construction categories shown in the map filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConstructionGroup {
    #[serde(rename = "Accessibilité")]
    Accessibility,
    #[serde(rename = "Performance énergétique")]
    EnergyPerformance,
    #[serde(rename = "Isolation / Étanchéité")]
    Insulation,
    #[serde(rename = "Végétalisation")]
    Greening,
    #[serde(rename = "Restructuration")]
    Restructuring,
    #[serde(rename = "Rénovation")]
    Renovation,
    #[serde(rename = "Modernisation")]
    Modernisation,
    #[serde(rename = "Ravalement")]
    FacadeCleaning,
    #[serde(rename = "Sécurisation")]
    Securing,
    #[serde(rename = "Embellissement")]
    Embellishment,
    #[serde(rename = "Amélioration fonctionnelle")]
    FunctionalImprovement,
    #[serde(rename = "Construction neuve")]
    NewConstruction,
    #[serde(rename = "Couverture")]
    Roofing,
    #[serde(rename = "Autre")]
    Other,
}

impl ConstructionGroup {
    pub const ALL: [ConstructionGroup; 14] = [
        ConstructionGroup::Accessibility,
        ConstructionGroup::EnergyPerformance,
        ConstructionGroup::Insulation,
        ConstructionGroup::Greening,
        ConstructionGroup::Restructuring,
        ConstructionGroup::Renovation,
        ConstructionGroup::Modernisation,
        ConstructionGroup::FacadeCleaning,
        ConstructionGroup::Securing,
        ConstructionGroup::Embellishment,
        ConstructionGroup::FunctionalImprovement,
        ConstructionGroup::NewConstruction,
        ConstructionGroup::Roofing,
        ConstructionGroup::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConstructionGroup::Accessibility => "Accessibilité",
            ConstructionGroup::EnergyPerformance => "Performance énergétique",
            ConstructionGroup::Insulation => "Isolation / Étanchéité",
            ConstructionGroup::Greening => "Végétalisation",
            ConstructionGroup::Restructuring => "Restructuration",
            ConstructionGroup::Renovation => "Rénovation",
            ConstructionGroup::Modernisation => "Modernisation",
            ConstructionGroup::FacadeCleaning => "Ravalement",
            ConstructionGroup::Securing => "Sécurisation",
            ConstructionGroup::Embellishment => "Embellissement",
            ConstructionGroup::FunctionalImprovement => "Amélioration fonctionnelle",
            ConstructionGroup::NewConstruction => "Construction neuve",
            ConstructionGroup::Roofing => "Couverture",
            ConstructionGroup::Other => "Autre",
        }
    }
}

impl fmt::Display for ConstructionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Evaluated top to bottom against folded text; the first hit wins, so the
// order here decides overlapping descriptions.
static RULES: Lazy<Vec<(Regex, ConstructionGroup)>> = Lazy::new(|| {
    [
        (r"accessibilit", ConstructionGroup::Accessibility),
        (
            r"performance.?energe|economie.?d.?energie|confort.?d.?ete|energie",
            ConstructionGroup::EnergyPerformance,
        ),
        (r"isol[ea]|insonori|etancheite|phonique", ConstructionGroup::Insulation),
        (r"vegetali", ConstructionGroup::Greening),
        (r"restructur|mise aux normes", ConstructionGroup::Restructuring),
        (r"renovation|renovacao", ConstructionGroup::Renovation),
        (r"modernisation", ConstructionGroup::Modernisation),
        (r"ravalement|facade", ConstructionGroup::FacadeCleaning),
        (r"securis|securite", ConstructionGroup::Securing),
        (r"embelliss", ConstructionGroup::Embellishment),
        (r"amelioration|reamenagement", ConstructionGroup::FunctionalImprovement),
        (r"construction|creation|cretion|pavillon", ConstructionGroup::NewConstruction),
        (r"couverture", ConstructionGroup::Roofing),
    ]
    .into_iter()
    .map(|(pattern, group)| {
        let re = Regex::new(pattern).expect("construction rule patterns are valid");
        (re, group)
    })
    .collect()
});

/// Maps a free-text `type_construction` to its canonical group.
///
/// Returns `None` for blank input and `Other` when no rule matches.
pub fn normalize_construction(raw: Option<&str>) -> Option<ConstructionGroup> {
    let folded = fold_text(raw?);
    if folded.is_empty() {
        return None;
    }

    let group = RULES
        .iter()
        .find(|(re, _)| re.is_match(&folded))
        .map(|(_, group)| *group)
        .unwrap_or(ConstructionGroup::Other);
    Some(group)
}
