/// Search, filter and detail-panel selection state
/// 
/// This is the one piece of mutable state in the application. The catalog
/// itself is read-only; a `FilterState` holds what the user typed and
/// clicked, and derives the visible subset from it on demand.

use std::fmt;

use super::data::AnimalRecord;

/// Class dropdown value: the "all" sentinel or one concrete class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassFilter {
    All,
    Only(String),
}

impl fmt::Display for ClassFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassFilter::All => write!(f, "Все классы"),
            ClassFilter::Only(class) => write!(f, "{class}"),
        }
    }
}

/// Region dropdown value: the "all" sentinel or one concrete region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionFilter {
    All,
    Only(String),
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionFilter::All => write!(f, "Все регионы"),
            RegionFilter::Only(region) => write!(f, "{region}"),
        }
    }
}

/// Mutable UI state for one viewing session.
///
/// The detail panel is a two-state machine: `selected_animal` is `None`
/// (closed) or `Some(id)` (open on that record). Selecting a new record
/// replaces the old one without an explicit close.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Current search text, matched case-insensitively against names
    pub search_query: String,
    /// Class constraint, exact match unless the sentinel is selected
    pub selected_class: ClassFilter,
    /// Region constraint, exact match unless the sentinel is selected
    pub selected_region: RegionFilter,
    /// Id of the record open in the detail panel, if any
    pub selected_animal: Option<u32>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selected_class: ClassFilter::All,
            selected_region: RegionFilter::All,
            selected_animal: None,
        }
    }
}

impl FilterState {
    /// Fresh session state: empty query, both sentinels, panel closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether one record passes all three active predicates.
    ///
    /// Search is case-insensitive substring containment on the common name
    /// or the scientific name; an empty query matches every record. Class
    /// and region are exact, case-sensitive comparisons.
    pub fn matches(&self, animal: &AnimalRecord) -> bool {
        let query = self.search_query.to_lowercase();
        let matches_search = animal.name.to_lowercase().contains(&query)
            || animal.scientific_name.to_lowercase().contains(&query);

        let matches_class = match &self.selected_class {
            ClassFilter::All => true,
            ClassFilter::Only(class) => *class == animal.class_name,
        };

        let matches_region = match &self.selected_region {
            RegionFilter::All => true,
            RegionFilter::Only(region) => *region == animal.region,
        };

        matches_search && matches_class && matches_region
    }

    /// Derive the visible subset, preserving catalog order.
    ///
    /// Pure and recomputed on every view; at three records that costs
    /// nothing, so there is no caching. An empty result is a valid result.
    pub fn visible<'a>(&self, animals: &'a [AnimalRecord]) -> Vec<&'a AnimalRecord> {
        animals.iter().filter(|animal| self.matches(animal)).collect()
    }

    /// Open the detail panel on one record, replacing any prior selection.
    ///
    /// The selection is intentionally not validated against the visible
    /// subset: a record stays open in the panel even when a later filter
    /// change drops it from the grid.
    pub fn select(&mut self, id: u32) {
        self.selected_animal = Some(id);
    }

    /// Close the detail panel. A no-op when nothing is open.
    pub fn close(&mut self) {
        self.selected_animal = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::Catalog;

    fn animals() -> Vec<AnimalRecord> {
        Catalog::load().unwrap().animals().to_vec()
    }

    fn names<'a>(visible: &[&'a AnimalRecord]) -> Vec<&'a str> {
        visible.iter().map(|animal| animal.name.as_str()).collect()
    }

    #[test]
    fn test_defaults_show_full_catalog_in_order() {
        let animals = animals();
        let state = FilterState::new();

        let visible = state.visible(&animals);
        assert_eq!(visible.len(), animals.len());
        assert_eq!(
            names(&visible),
            ["Африканский лев", "Тропический попугай ара", "Рыба-клоун"]
        );
    }

    #[test]
    fn test_exact_name_matches_in_any_case() {
        let animals = animals();
        let mut state = FilterState::new();

        for animal in &animals {
            state.search_query = animal.name.clone();
            assert!(state.visible(&animals).contains(&animal));

            state.search_query = animal.name.to_uppercase();
            assert!(state.visible(&animals).contains(&animal));
        }
    }

    #[test]
    fn test_scientific_name_is_searched_too() {
        let animals = animals();
        let mut state = FilterState::new();
        state.search_query = "panthera".to_string();

        assert_eq!(names(&state.visible(&animals)), ["Африканский лев"]);
    }

    #[test]
    fn test_substring_search_finds_the_parrot() {
        let animals = animals();
        let mut state = FilterState::new();
        state.search_query = "ара".to_string();

        assert_eq!(names(&state.visible(&animals)), ["Тропический попугай ара"]);
    }

    #[test]
    fn test_class_filter_alone() {
        let animals = animals();
        let mut state = FilterState::new();
        state.selected_class = ClassFilter::Only("Птицы".to_string());

        assert_eq!(names(&state.visible(&animals)), ["Тропический попугай ара"]);
    }

    #[test]
    fn test_region_filter_alone() {
        let animals = animals();
        let mut state = FilterState::new();
        state.selected_region = RegionFilter::Only("Африка".to_string());

        assert_eq!(names(&state.visible(&animals)), ["Африканский лев"]);
    }

    #[test]
    fn test_class_without_records_yields_empty_grid() {
        let animals = animals();
        let mut state = FilterState::new();
        state.selected_class = ClassFilter::Only("Рептилии".to_string());

        assert!(state.visible(&animals).is_empty());
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let animals = animals();
        let mut state = FilterState::new();
        // Each constraint matches a record on its own, but no record
        // satisfies both at once.
        state.selected_class = ClassFilter::Only("Птицы".to_string());
        state.selected_region = RegionFilter::Only("Африка".to_string());

        assert!(state.visible(&animals).is_empty());
    }

    #[test]
    fn test_selection_is_replaced_without_close() {
        let mut state = FilterState::new();

        state.select(1);
        assert_eq!(state.selected_animal, Some(1));

        state.select(3);
        assert_eq!(state.selected_animal, Some(3));

        state.close();
        assert_eq!(state.selected_animal, None);
    }

    #[test]
    fn test_close_when_closed_is_a_noop() {
        let mut state = FilterState::new();
        state.close();
        assert_eq!(state.selected_animal, None);
    }

    #[test]
    fn test_selection_survives_filter_changes() {
        let animals = animals();
        let mut state = FilterState::new();

        state.select(1);
        state.selected_class = ClassFilter::Only("Птицы".to_string());

        // The lion is no longer visible but stays selected.
        assert!(!state.visible(&animals).iter().any(|animal| animal.id == 1));
        assert_eq!(state.selected_animal, Some(1));
    }
}
