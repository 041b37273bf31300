//! Aggregation Queries
//!
//! Pure, total functions over the loaded buildings and flattened purchase
//! rows. Every function tolerates absent selections and unresolved foreign
//! keys by degrading to zero, empty, or sentinel results.

use ahash::{AHashMap, AHashSet};

use crate::analytics::FlattenedPurchase;
use crate::constants::UNKNOWN_BUILDING;
use crate::domain::{Building, building_by_id};

/// Distinct manufacturers appearing in the rows, sorted ascending
pub fn manufacturer_options(rows: &[FlattenedPurchase]) -> Vec<String> {
    sorted_strings(rows.iter().map(|r| r.manufacturer.as_str()))
}

/// Distinct item category IDs appearing in the rows, sorted ascending
pub fn category_options(rows: &[FlattenedPurchase]) -> Vec<i64> {
    sorted_ids(rows.iter().map(|r| r.item_category_id))
}

/// Distinct item IDs appearing in the rows, sorted ascending
pub fn item_options(rows: &[FlattenedPurchase]) -> Vec<i64> {
    sorted_ids(rows.iter().map(|r| r.item_id))
}

/// Distinct countries appearing in the buildings, sorted ascending
pub fn country_options(buildings: &[Building]) -> Vec<String> {
    sorted_strings(buildings.iter().map(|b| b.country.as_str()))
}

/// Distinct states appearing in the buildings, sorted ascending
pub fn state_options(buildings: &[Building]) -> Vec<String> {
    sorted_strings(buildings.iter().map(|b| b.state.as_str()))
}

/// Total purchase cost for the selected manufacturer; 0 without a selection
pub fn manufacturer_total(rows: &[FlattenedPurchase], selected: Option<&str>) -> f64 {
    let Some(manufacturer) = selected else {
        return 0.0;
    };
    rows.iter()
        .filter(|r| r.manufacturer == manufacturer)
        .map(|r| r.cost)
        .sum()
}

/// Total purchase cost for the selected item category; 0 without a selection
pub fn category_total(rows: &[FlattenedPurchase], selected: Option<i64>) -> f64 {
    let Some(category_id) = selected else {
        return 0.0;
    };
    rows.iter()
        .filter(|r| r.item_category_id == category_id)
        .map(|r| r.cost)
        .sum()
}

/// Total purchase cost in the selected country
///
/// Joins rows to buildings through `building_id`; rows whose ID resolves to
/// no building contribute to no country.
pub fn country_total(
    buildings: &[Building],
    rows: &[FlattenedPurchase],
    selected: Option<&str>,
) -> f64 {
    let Some(country) = selected else {
        return 0.0;
    };
    location_total(rows, buildings.iter().filter(|b| b.country == country))
}

/// Total purchase cost in the selected state; same join as [`country_total`]
pub fn state_total(
    buildings: &[Building],
    rows: &[FlattenedPurchase],
    selected: Option<&str>,
) -> f64 {
    let Some(state) = selected else {
        return 0.0;
    };
    location_total(rows, buildings.iter().filter(|b| b.state == state))
}

/// Number of times the selected item was purchased
///
/// Counts occurrences, so duplicate purchases of one item within a session
/// each count.
pub fn item_purchase_count(rows: &[FlattenedPurchase], selected: Option<i64>) -> usize {
    let Some(item_id) = selected else {
        return 0;
    };
    rows.iter().filter(|r| r.item_id == item_id).count()
}

/// Name of the building with the highest total purchase cost
///
/// Groups rows by building ID in first-encounter order and keeps the group
/// with the strictly greatest sum, so on a tie the earliest-encountered
/// building ID wins. Returns the unknown sentinel when there are no rows or
/// the winning ID resolves to no building.
pub fn top_building_name(buildings: &[Building], rows: &[FlattenedPurchase]) -> String {
    let mut totals: AHashMap<i64, f64> = AHashMap::new();
    let mut encounter_order: Vec<i64> = Vec::new();
    for row in rows {
        totals
            .entry(row.building_id)
            .and_modify(|total| *total += row.cost)
            .or_insert_with(|| {
                encounter_order.push(row.building_id);
                row.cost
            });
    }

    let mut top: Option<(i64, f64)> = None;
    for id in encounter_order {
        let total = totals[&id];
        if top.is_none_or(|(_, best)| total > best) {
            top = Some((id, total));
        }
    }

    top.and_then(|(id, _)| building_by_id(buildings, id))
        .map(|b| b.building_name.clone())
        .unwrap_or_else(|| UNKNOWN_BUILDING.to_string())
}

fn location_total<'a>(
    rows: &[FlattenedPurchase],
    matching: impl Iterator<Item = &'a Building>,
) -> f64 {
    let building_ids: AHashSet<i64> = matching.map(|b| b.building_id).collect();
    rows.iter()
        .filter(|r| building_ids.contains(&r.building_id))
        .map(|r| r.cost)
        .sum()
}

fn sorted_ids(ids: impl Iterator<Item = i64>) -> Vec<i64> {
    let set: AHashSet<i64> = ids.collect();
    let mut options: Vec<i64> = set.into_iter().collect();
    options.sort_unstable();
    options
}

fn sorted_strings<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let set: AHashSet<&str> = values.collect();
    let mut options: Vec<String> = set.into_iter().map(str::to_string).collect();
    options.sort();
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_building(id: i64, name: &str, state: &str, country: &str) -> Building {
        Building {
            building_id: id,
            building_name: name.to_string(),
            city: String::new(),
            state: state.to_string(),
            country: country.to_string(),
        }
    }

    fn make_row(
        manufacturer: &str,
        building_id: i64,
        item_id: i64,
        item_category_id: i64,
        cost: f64,
    ) -> FlattenedPurchase {
        FlattenedPurchase {
            manufacturer: manufacturer.to_string(),
            building_id,
            item_id,
            item_category_id,
            cost,
        }
    }

    fn fixture_buildings() -> Vec<Building> {
        vec![
            make_building(1, "Building A", "CA", "USA"),
            make_building(2, "Building B", "NY", "USA"),
            make_building(3, "Building C", "ON", "Canada"),
        ]
    }

    fn fixture_rows() -> Vec<FlattenedPurchase> {
        vec![
            make_row("Samsung", 3, 100, 10, 7.0),
            make_row("Apple", 1, 100, 10, 2.0),
            make_row("Apple", 1, 200, 20, 3.0),
            make_row("Apple", 2, 100, 10, 5.0),
            make_row("Apple", 2, 200, 20, 1.0),
        ]
    }

    #[test]
    fn test_options_are_unique_and_sorted() {
        let buildings = fixture_buildings();
        let rows = fixture_rows();

        assert_eq!(manufacturer_options(&rows), vec!["Apple", "Samsung"]);
        assert_eq!(category_options(&rows), vec![10, 20]);
        assert_eq!(item_options(&rows), vec![100, 200]);
        assert_eq!(country_options(&buildings), vec!["Canada", "USA"]);
        assert_eq!(state_options(&buildings), vec!["CA", "NY", "ON"]);
    }

    #[test]
    fn test_options_on_empty_collections() {
        assert!(manufacturer_options(&[]).is_empty());
        assert!(category_options(&[]).is_empty());
        assert!(item_options(&[]).is_empty());
        assert!(country_options(&[]).is_empty());
        assert!(state_options(&[]).is_empty());
    }

    #[test]
    fn test_totals_match_expected_scenario() {
        let buildings = fixture_buildings();
        let rows = fixture_rows();

        assert_eq!(manufacturer_total(&rows, Some("Apple")), 11.0);
        assert_eq!(category_total(&rows, Some(10)), 14.0);
        assert_eq!(country_total(&buildings, &rows, Some("USA")), 11.0);
        assert_eq!(state_total(&buildings, &rows, Some("CA")), 5.0);
        assert_eq!(item_purchase_count(&rows, Some(100)), 3);
    }

    #[test]
    fn test_no_selection_degrades_to_zero() {
        let buildings = fixture_buildings();
        let rows = fixture_rows();

        assert_eq!(manufacturer_total(&rows, None), 0.0);
        assert_eq!(category_total(&rows, None), 0.0);
        assert_eq!(country_total(&buildings, &rows, None), 0.0);
        assert_eq!(state_total(&buildings, &rows, None), 0.0);
        assert_eq!(item_purchase_count(&rows, None), 0);
    }

    #[test]
    fn test_item_purchase_count_includes_duplicates() {
        let rows = vec![
            make_row("Apple", 1, 100, 10, 2.0),
            make_row("Apple", 1, 100, 10, 2.0),
        ];
        assert_eq!(item_purchase_count(&rows, Some(100)), 2);
    }

    #[test]
    fn test_location_totals_skip_orphan_building_ids() {
        let buildings = fixture_buildings();
        let rows = vec![
            make_row("Apple", 1, 100, 10, 2.0),
            // building 999 exists nowhere; contributes to no location total
            make_row("Apple", 999, 100, 10, 50.0),
        ];

        assert_eq!(country_total(&buildings, &rows, Some("USA")), 2.0);
        assert_eq!(state_total(&buildings, &rows, Some("CA")), 2.0);
    }

    #[test]
    fn test_location_total_zero_when_no_building_matches() {
        let buildings = fixture_buildings();
        let rows = fixture_rows();
        assert_eq!(country_total(&buildings, &rows, Some("France")), 0.0);
    }

    #[test]
    fn test_top_building_resolves_name() {
        let buildings = fixture_buildings();
        let rows = fixture_rows();
        // totals: building 1 = 5, building 2 = 6, building 3 = 7
        assert_eq!(top_building_name(&buildings, &rows), "Building C");
    }

    #[test]
    fn test_top_building_sentinel_on_empty_rows() {
        assert_eq!(top_building_name(&fixture_buildings(), &[]), "\u{2014}");
    }

    #[test]
    fn test_top_building_sentinel_when_winner_unresolved() {
        let rows = vec![make_row("Apple", 999, 1, 1, 10.0)];
        assert_eq!(top_building_name(&fixture_buildings(), &rows), "\u{2014}");
    }

    #[test]
    fn test_top_building_tie_breaks_to_first_encountered() {
        let buildings = fixture_buildings();
        // buildings 2 and 1 tie at 5.0; building 2 appears first in the rows
        let rows = vec![
            make_row("Apple", 2, 100, 10, 5.0),
            make_row("Apple", 1, 100, 10, 5.0),
        ];
        assert_eq!(top_building_name(&buildings, &rows), "Building B");
    }
}
