//! Tests for catalog module

#[cfg(test)]
mod rarity_tests {
    use crate::catalog::Rarity;

    #[test]
    fn glyph_matches_rarity_tier() {
        assert_eq!(Rarity::Common.glyph(), "⚪");
        assert_eq!(Rarity::Uncommon.glyph(), "🟢");
        assert_eq!(Rarity::Rare.glyph(), "🔵");
        assert_eq!(Rarity::Legendary.glyph(), "🟣✨");
    }

    #[test]
    fn deserializes_from_lowercase_names() {
        assert_eq!(
            serde_json::from_str::<Rarity>(r#""common""#).unwrap(),
            Rarity::Common
        );
        assert_eq!(
            serde_json::from_str::<Rarity>(r#""uncommon""#).unwrap(),
            Rarity::Uncommon
        );
        assert_eq!(
            serde_json::from_str::<Rarity>(r#""rare""#).unwrap(),
            Rarity::Rare
        );
        assert_eq!(
            serde_json::from_str::<Rarity>(r#""legendary""#).unwrap(),
            Rarity::Legendary
        );
    }

    #[test]
    fn rejects_unknown_rarity_name() {
        assert!(serde_json::from_str::<Rarity>(r#""mythic""#).is_err());
    }

    #[test]
    fn rejects_capitalized_rarity_name() {
        assert!(serde_json::from_str::<Rarity>(r#""Common""#).is_err());
    }
}

#[cfg(test)]
mod catalog_construction_tests {
    use crate::catalog::{Rarity, RewardCatalog, RewardItem};
    use crate::errors::CatalogError;

    #[test]
    fn from_items_accepts_single_item() {
        let catalog = RewardCatalog::from_items(vec![RewardItem {
            name: "Pikachu".to_string(),
            weight: 5.0,
            rarity: Rarity::Rare,
        }])
        .unwrap();

        assert_eq!(catalog.items().len(), 1);
        assert_eq!(catalog.items()[0].name, "Pikachu");
    }

    #[test]
    fn from_items_rejects_empty_list() {
        let result = RewardCatalog::from_items(vec![]);
        assert_eq!(result.unwrap_err(), CatalogError::EmptyCatalog);
    }

    #[test]
    fn from_items_rejects_zero_weight() {
        let result = RewardCatalog::from_items(vec![RewardItem {
            name: "Magikarp".to_string(),
            weight: 0.0,
            rarity: Rarity::Common,
        }]);

        assert_eq!(
            result.unwrap_err(),
            CatalogError::InvalidWeight {
                name: "Magikarp".to_string(),
                weight: 0.0,
            }
        );
    }

    #[test]
    fn from_items_rejects_negative_weight() {
        let result = RewardCatalog::from_items(vec![RewardItem {
            name: "Magikarp".to_string(),
            weight: -1.5,
            rarity: Rarity::Common,
        }]);

        assert!(matches!(
            result.unwrap_err(),
            CatalogError::InvalidWeight { .. }
        ));
    }

    #[test]
    fn from_items_rejects_nan_weight() {
        let result = RewardCatalog::from_items(vec![RewardItem {
            name: "Ditto".to_string(),
            weight: f64::NAN,
            rarity: Rarity::Uncommon,
        }]);

        assert!(matches!(
            result.unwrap_err(),
            CatalogError::InvalidWeight { .. }
        ));
    }

    #[test]
    fn from_items_rejects_infinite_weight() {
        let result = RewardCatalog::from_items(vec![RewardItem {
            name: "Arceus".to_string(),
            weight: f64::INFINITY,
            rarity: Rarity::Legendary,
        }]);

        assert!(matches!(
            result.unwrap_err(),
            CatalogError::InvalidWeight { .. }
        ));
    }

    #[test]
    fn from_items_rejects_overflowing_total_weight() {
        let result = RewardCatalog::from_items(vec![
            RewardItem {
                name: "Snorlax".to_string(),
                weight: f64::MAX,
                rarity: Rarity::Rare,
            },
            RewardItem {
                name: "Slowpoke".to_string(),
                weight: f64::MAX,
                rarity: Rarity::Common,
            },
        ]);

        assert!(matches!(
            result.unwrap_err(),
            CatalogError::InvalidTotalWeight { .. }
        ));
    }

    #[test]
    fn from_items_names_the_offending_item() {
        let result = RewardCatalog::from_items(vec![
            RewardItem {
                name: "Eevee".to_string(),
                weight: 3.0,
                rarity: Rarity::Uncommon,
            },
            RewardItem {
                name: "Porygon".to_string(),
                weight: 0.0,
                rarity: Rarity::Rare,
            },
        ]);

        match result.unwrap_err() {
            CatalogError::InvalidWeight { name, weight } => {
                assert_eq!(name, "Porygon");
                assert_eq!(weight, 0.0);
            }
            other => panic!("Expected InvalidWeight, got {:?}", other),
        }
    }

    #[test]
    fn from_items_preserves_item_order() {
        let catalog = RewardCatalog::from_items(vec![
            RewardItem {
                name: "Bulbasaur".to_string(),
                weight: 1.0,
                rarity: Rarity::Common,
            },
            RewardItem {
                name: "Charmander".to_string(),
                weight: 2.0,
                rarity: Rarity::Common,
            },
            RewardItem {
                name: "Squirtle".to_string(),
                weight: 3.0,
                rarity: Rarity::Common,
            },
        ])
        .unwrap();

        let names: Vec<&str> = catalog.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Bulbasaur", "Charmander", "Squirtle"]);
    }

    #[test]
    fn total_weight_sums_all_items() {
        let catalog = RewardCatalog::from_items(vec![
            RewardItem {
                name: "Oddish".to_string(),
                weight: 1.5,
                rarity: Rarity::Common,
            },
            RewardItem {
                name: "Gloom".to_string(),
                weight: 2.5,
                rarity: Rarity::Uncommon,
            },
        ])
        .unwrap();

        assert_eq!(catalog.total_weight(), 4.0);
    }
}

#[cfg(test)]
mod catalog_load_tests {
    use std::fs;
    use std::path::Path;

    use crate::catalog::{Rarity, RewardCatalog};
    use crate::errors::CatalogError;

    fn write_catalog_file(dir: &Path, contents: &str) -> std::path::PathBuf {
        let path = dir.join("rewards.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_reads_valid_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog_file(
            dir.path(),
            r#"[
                { "name": "Pidgey", "weight": 60, "rarity": "common" },
                { "name": "Pikachu", "weight": 5.5, "rarity": "rare" }
            ]"#,
        );

        let catalog = RewardCatalog::load(&path).unwrap();

        assert_eq!(catalog.items().len(), 2);
        assert_eq!(catalog.items()[0].name, "Pidgey");
        assert_eq!(catalog.items()[0].weight, 60.0);
        assert_eq!(catalog.items()[1].rarity, Rarity::Rare);
    }

    #[test]
    fn load_returns_file_not_found_for_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.json");

        let result = RewardCatalog::load(&path);

        assert!(matches!(
            result.unwrap_err(),
            CatalogError::FileNotFound { .. }
        ));
    }

    #[test]
    fn load_returns_parse_error_for_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog_file(dir.path(), "not json at all");

        let result = RewardCatalog::load(&path);

        assert!(matches!(result.unwrap_err(), CatalogError::ParseError { .. }));
    }

    #[test]
    fn load_returns_parse_error_when_top_level_is_not_an_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog_file(
            dir.path(),
            r#"{ "name": "Pidgey", "weight": 60, "rarity": "common" }"#,
        );

        let result = RewardCatalog::load(&path);

        assert!(matches!(result.unwrap_err(), CatalogError::ParseError { .. }));
    }

    #[test]
    fn load_returns_parse_error_for_unknown_rarity() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog_file(
            dir.path(),
            r#"[ { "name": "Mewtwo", "weight": 1, "rarity": "mythic" } ]"#,
        );

        let result = RewardCatalog::load(&path);

        assert!(matches!(result.unwrap_err(), CatalogError::ParseError { .. }));
    }

    #[test]
    fn load_rejects_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog_file(dir.path(), "[]");

        let result = RewardCatalog::load(&path);

        assert_eq!(result.unwrap_err(), CatalogError::EmptyCatalog);
    }

    #[test]
    fn load_rejects_invalid_weight_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog_file(
            dir.path(),
            r#"[ { "name": "Voltorb", "weight": -2, "rarity": "uncommon" } ]"#,
        );

        let result = RewardCatalog::load(&path);

        assert!(matches!(
            result.unwrap_err(),
            CatalogError::InvalidWeight { .. }
        ));
    }
}
