use serde::Deserialize;
use thiserror::Error;

use super::data::{AnimalRecord, ResearchStat};

/// The whole catalog ships inside the binary. There is no database and no
/// import path; the portal is a demo over a fixed collection.
const SEED_JSON: &str = include_str!("../../assets/catalog.json");

/// Dropdown options for the class filter.
///
/// Deliberately a fixed list rather than one derived from the records: the
/// portal offers classes (e.g. "Рептилии") that no seeded record carries yet,
/// and selecting one of those must produce an empty grid.
pub const CLASS_OPTIONS: &[&str] = &[
    "Млекопитающие",
    "Птицы",
    "Костные рыбы",
    "Рептилии",
];

/// Dropdown options for the region filter.
pub const REGION_OPTIONS: &[&str] = &[
    "Африка",
    "Южная Америка",
    "Индо-Тихоокеанский регион",
];

/// Errors raised while loading the embedded seed.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The JSON failed to parse, or an icon name in it is unrecognized
    #[error("failed to parse embedded catalog seed: {0}")]
    Seed(#[from] serde_json::Error),
    /// Two records share an id
    #[error("duplicate animal id {0} in catalog seed")]
    DuplicateId(u32),
}

/// The Catalog holds the fixed animal collection and the static research
/// statistics. It is loaded once at startup and read-only for the lifetime
/// of the session; the filter state only points into it by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    animals: Vec<AnimalRecord>,
    stats: Vec<ResearchStat>,
}

/// On-disk (well, in-binary) shape of the seed file
#[derive(Deserialize)]
struct Seed {
    animals: Vec<AnimalRecord>,
    stats: Vec<ResearchStat>,
}

impl Catalog {
    /// Parse the embedded seed and verify its invariants.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(SEED_JSON)
    }

    /// Parse one seed document and verify its invariants.
    ///
    /// `id` must be unique across the collection; every other field is
    /// free-form text with no cross-record checks.
    fn from_json(seed: &str) -> Result<Self, CatalogError> {
        let seed: Seed = serde_json::from_str(seed)?;

        let mut seen = Vec::with_capacity(seed.animals.len());
        for animal in &seed.animals {
            if seen.contains(&animal.id) {
                return Err(CatalogError::DuplicateId(animal.id));
            }
            seen.push(animal.id);
        }

        Ok(Catalog {
            animals: seed.animals,
            stats: seed.stats,
        })
    }

    /// All records, in seed order.
    pub fn animals(&self) -> &[AnimalRecord] {
        &self.animals
    }

    /// The research statistics row.
    pub fn stats(&self) -> &[ResearchStat] {
        &self.stats
    }

    /// Look up one record by id.
    pub fn get(&self, id: u32) -> Option<&AnimalRecord> {
        self.animals.iter().find(|animal| animal.id == id)
    }

    /// Number of species in the catalog.
    pub fn species_count(&self) -> usize {
        self.animals.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_loads() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.species_count(), 3);
        assert_eq!(catalog.stats().len(), 4);
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        // Two records sharing id 1; otherwise well-formed.
        let seed = r#"{
            "animals": [
                {
                    "id": 1, "name": "А", "scientific_name": "A",
                    "class": "Птицы", "habitat": "Лес", "region": "Африка",
                    "conservation_status": "Стабильный", "image": "https://example.com/a.jpg",
                    "population": "100", "characteristics": []
                },
                {
                    "id": 1, "name": "Б", "scientific_name": "B",
                    "class": "Птицы", "habitat": "Лес", "region": "Африка",
                    "conservation_status": "Стабильный", "image": "https://example.com/b.jpg",
                    "population": "100", "characteristics": []
                }
            ],
            "stats": []
        }"#;

        let err = Catalog::from_json(seed).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(1)));
    }

    #[test]
    fn test_seed_order_is_preserved() {
        let catalog = Catalog::load().unwrap();
        let names: Vec<&str> = catalog
            .animals()
            .iter()
            .map(|animal| animal.name.as_str())
            .collect();
        assert_eq!(
            names,
            ["Африканский лев", "Тропический попугай ара", "Рыба-клоун"]
        );
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::load().unwrap();
        let parrot = catalog.get(2).unwrap();
        assert_eq!(parrot.scientific_name, "Ara macao");
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_every_seeded_class_and_region_is_a_dropdown_option() {
        let catalog = Catalog::load().unwrap();
        for animal in catalog.animals() {
            assert!(CLASS_OPTIONS.contains(&animal.class_name.as_str()));
            assert!(REGION_OPTIONS.contains(&animal.region.as_str()));
        }
    }
}
