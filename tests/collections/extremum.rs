//! Integration tests for extremum searches

use proptest::prelude::*;
use sundry_collections::ExtremumExt;

#[test]
fn empty_sequences_return_minus_one() {
    let empty: [u8; 0] = [];
    assert_eq!(empty.iter().index_of_max().unwrap(), -1);
    assert_eq!(empty.iter().index_of_min_by_key(|v| **v).unwrap(), -1);
    assert_eq!(empty.iter().long_index_of_max_by(Ord::cmp).unwrap(), -1);
}

#[test]
fn ties_pick_first_occurrence() {
    let scores = [3, 8, 8, 1, 1];
    assert_eq!(scores.iter().index_of_max().unwrap(), 1);
    assert_eq!(scores.iter().index_of_min().unwrap(), 3);
    assert_eq!(scores.iter().long_index_of_max().unwrap(), 1);
    assert_eq!(scores.iter().long_index_of_min().unwrap(), 3);
}

#[test]
fn search_by_record_field() {
    struct City {
        name: &'static str,
        population: u32,
    }
    let cities = [
        City { name: "Avonlea", population: 900 },
        City { name: "Brigadoon", population: 40 },
        City { name: "Camelot", population: 12_000 },
    ];
    let largest = cities.iter().index_of_max_by_key(|c| c.population).unwrap();
    let smallest = cities.iter().long_index_of_min_by_key(|c| c.population).unwrap();
    assert_eq!(cities[usize::try_from(largest).unwrap()].name, "Camelot");
    assert_eq!(cities[usize::try_from(smallest).unwrap()].name, "Brigadoon");
}

#[test]
fn custom_comparator_for_floats() {
    let readings = [0.25_f64, f64::NEG_INFINITY, 7.5, -0.0];
    assert_eq!(readings.iter().index_of_min_by(|a, b| a.total_cmp(b)).unwrap(), 1);
    assert_eq!(readings.iter().long_index_of_min_by(|a, b| a.total_cmp(b)).unwrap(), 1);
    assert_eq!(readings.iter().index_of_max_by(|a, b| a.total_cmp(b)).unwrap(), 2);
}

proptest! {
    #[test]
    fn empty_iff_minus_one(values in prop::collection::vec(any::<i8>(), 0..32)) {
        let index = values.iter().index_of_max().unwrap();
        prop_assert_eq!(index == -1, values.is_empty());
        let index = values.iter().long_index_of_min().unwrap();
        prop_assert_eq!(index == -1, values.is_empty());
    }
}
