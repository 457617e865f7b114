/// Shared data structures for the application state
/// 
/// These structs represent the data model that flows between
/// the catalog layer and the UI layer.

use serde::Deserialize;

use crate::ui::icon::Icon;

/// Represents a single animal entry in the fixed catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnimalRecord {
    /// Unique catalog ID
    pub id: u32,
    /// Common name (e.g. "Африканский лев")
    pub name: String,
    /// Latin binomial name
    pub scientific_name: String,
    /// Taxonomic class label (e.g. "Млекопитающие")
    #[serde(rename = "class")]
    pub class_name: String,
    /// Free-text habitat description
    pub habitat: String,
    /// Geographic region label, matched exactly by the region filter
    pub region: String,
    /// Conservation status label, also used to pick the badge tint
    pub conservation_status: String,
    /// URI of an externally hosted photo (never fetched by this app)
    pub image: String,
    /// Free-text population estimate, not necessarily numeric
    pub population: String,
    /// Key characteristics listed in the detail panel
    pub characteristics: Vec<String>,
}

/// One entry of the research statistics row on the landing page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResearchStat {
    /// Stat description (e.g. "Видов изучено")
    pub label: String,
    /// Display value, preformatted (e.g. "2,847")
    pub value: String,
    /// Icon shown next to the value
    pub icon: Icon,
}
