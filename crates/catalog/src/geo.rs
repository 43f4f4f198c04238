//! Country/region/city reference tables and catalog search.

use serde::{Deserialize, Serialize};

use crate::interests::INTERESTS;

/// What kind of catalog entry a search hit is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogEntryKind {
    Country,
    Region,
    City,
    Interest,
}

/// A single searchable catalog entry. For regions and cities `parent`
/// holds the owning country code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub kind: CatalogEntryKind,
    /// Country code for geo entries, taxonomy name for interests.
    pub key: String,
    pub display_name: String,
    pub parent: Option<String>,
}

/// (code, display name)
const COUNTRIES: &[(&str, &str)] = &[
    ("US", "United States"),
    ("CA", "Canada"),
    ("GB", "United Kingdom"),
    ("DE", "Germany"),
    ("FR", "France"),
    ("ES", "Spain"),
    ("IT", "Italy"),
    ("BR", "Brazil"),
    ("MX", "Mexico"),
    ("AU", "Australia"),
    ("JP", "Japan"),
    ("IN", "India"),
];

/// (country code, regions)
const REGIONS: &[(&str, &[&str])] = &[
    (
        "US",
        &[
            "California",
            "New York",
            "Texas",
            "Florida",
            "Illinois",
            "Washington",
        ],
    ),
    ("CA", &["Ontario", "Quebec", "British Columbia", "Alberta"]),
    ("GB", &["England", "Scotland", "Wales", "Northern Ireland"]),
    ("DE", &["Bavaria", "Berlin", "Hesse", "North Rhine-Westphalia"]),
    ("BR", &["Sao Paulo", "Rio de Janeiro", "Minas Gerais"]),
    ("AU", &["New South Wales", "Victoria", "Queensland"]),
];

/// (country code, cities)
const CITIES: &[(&str, &[&str])] = &[
    (
        "US",
        &[
            "New York",
            "Los Angeles",
            "Chicago",
            "Houston",
            "Miami",
            "Seattle",
            "San Francisco",
        ],
    ),
    ("CA", &["Toronto", "Montreal", "Vancouver", "Calgary"]),
    ("GB", &["London", "Manchester", "Birmingham", "Edinburgh"]),
    ("DE", &["Berlin", "Munich", "Hamburg", "Frankfurt"]),
    ("BR", &["Sao Paulo", "Rio de Janeiro", "Belo Horizonte"]),
    ("AU", &["Sydney", "Melbourne", "Brisbane"]),
];

/// Read-only geo/interest catalog over the static tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoCatalog;

impl GeoCatalog {
    pub fn new() -> Self {
        Self
    }

    /// All known country codes.
    pub fn countries(&self) -> Vec<&'static str> {
        COUNTRIES.iter().map(|(code, _)| *code).collect()
    }

    pub fn country_name(&self, code: &str) -> Option<&'static str> {
        COUNTRIES
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(code))
            .map(|(_, name)| *name)
    }

    pub fn is_known_country(&self, code: &str) -> bool {
        self.country_name(code).is_some()
    }

    /// Regions belonging to a country; empty when none are cataloged.
    pub fn regions_of(&self, country: &str) -> &'static [&'static str] {
        REGIONS
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(country))
            .map(|(_, regions)| *regions)
            .unwrap_or(&[])
    }

    /// Cities belonging to a country; empty when none are cataloged.
    pub fn cities_of(&self, country: &str) -> &'static [&'static str] {
        CITIES
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(country))
            .map(|(_, cities)| *cities)
            .unwrap_or(&[])
    }

    /// True when `region` is a catalog child of `country`.
    pub fn is_region_of(&self, country: &str, region: &str) -> bool {
        self.regions_of(country)
            .iter()
            .any(|r| r.eq_ignore_ascii_case(region))
    }

    /// True when `city` is a catalog child of `country`.
    pub fn is_city_of(&self, country: &str, city: &str) -> bool {
        self.cities_of(country)
            .iter()
            .any(|c| c.eq_ignore_ascii_case(city))
    }

    /// Case-insensitive substring search across the requested entry kinds.
    pub fn search(&self, query: &str, kinds: &[CatalogEntryKind]) -> Vec<CatalogEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let wants = |kind: CatalogEntryKind| kinds.is_empty() || kinds.contains(&kind);
        let mut hits = Vec::new();

        if wants(CatalogEntryKind::Country) {
            for (code, name) in COUNTRIES {
                if name.to_lowercase().contains(&needle)
                    || code.to_lowercase().contains(&needle)
                {
                    hits.push(CatalogEntry {
                        kind: CatalogEntryKind::Country,
                        key: (*code).to_string(),
                        display_name: (*name).to_string(),
                        parent: None,
                    });
                }
            }
        }

        if wants(CatalogEntryKind::Region) {
            for (country, regions) in REGIONS {
                for region in *regions {
                    if region.to_lowercase().contains(&needle) {
                        hits.push(CatalogEntry {
                            kind: CatalogEntryKind::Region,
                            key: (*region).to_string(),
                            display_name: (*region).to_string(),
                            parent: Some((*country).to_string()),
                        });
                    }
                }
            }
        }

        if wants(CatalogEntryKind::City) {
            for (country, cities) in CITIES {
                for city in *cities {
                    if city.to_lowercase().contains(&needle) {
                        hits.push(CatalogEntry {
                            kind: CatalogEntryKind::City,
                            key: (*city).to_string(),
                            display_name: (*city).to_string(),
                            parent: Some((*country).to_string()),
                        });
                    }
                }
            }
        }

        if wants(CatalogEntryKind::Interest) {
            for interest in INTERESTS {
                if interest.to_lowercase().contains(&needle) {
                    hits.push(CatalogEntry {
                        kind: CatalogEntryKind::Interest,
                        key: (*interest).to_string(),
                        display_name: (*interest).to_string(),
                        parent: None,
                    });
                }
            }
        }

        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_lookup() {
        let catalog = GeoCatalog::new();
        assert_eq!(catalog.country_name("US"), Some("United States"));
        assert_eq!(catalog.country_name("us"), Some("United States"));
        assert!(catalog.country_name("ZZ").is_none());
    }

    #[test]
    fn test_region_and_city_children() {
        let catalog = GeoCatalog::new();
        assert!(catalog.is_region_of("US", "California"));
        assert!(!catalog.is_region_of("GB", "California"));
        assert!(catalog.is_city_of("CA", "Toronto"));
        assert!(!catalog.is_city_of("US", "Toronto"));
    }

    #[test]
    fn test_uncataloged_country_has_no_children() {
        let catalog = GeoCatalog::new();
        assert!(catalog.regions_of("JP").is_empty());
        assert!(catalog.cities_of("JP").is_empty());
    }

    #[test]
    fn test_search_filters_by_kind() {
        let catalog = GeoCatalog::new();

        // "New York" exists as both a region and a city of US.
        let regions = catalog.search("new york", &[CatalogEntryKind::Region]);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].parent.as_deref(), Some("US"));

        let all = catalog.search("new york", &[]);
        assert!(all.len() >= 2);
    }

    #[test]
    fn test_search_empty_query_returns_nothing() {
        let catalog = GeoCatalog::new();
        assert!(catalog.search("  ", &[]).is_empty());
    }

    #[test]
    fn test_search_finds_interests() {
        let catalog = GeoCatalog::new();
        let hits = catalog.search("fitness", &[CatalogEntryKind::Interest]);
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|h| h.kind == CatalogEntryKind::Interest));
    }
}
