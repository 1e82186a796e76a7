//! Integration tests for map lookups and key-value pairs

use std::collections::{BTreeMap, HashMap};

use sundry_collections::{KeyValuePair, MapLookup};

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn missing_key_uses_default() {
    let map: HashMap<String, u32> = HashMap::from([("a".to_string(), 1)]);
    assert_eq!(map.get_value_or(&"b".to_string(), 99), 99);
    assert_eq!(map.get_value_or_default(&"b".to_string()), 0);
    assert_eq!(map.get_value_or_none(&"b".to_string()), None);
}

#[test]
fn stored_zero_value_wins_over_default() {
    let map = BTreeMap::from([(3_u8, 0_i64)]);
    assert_eq!(map.get_value_or(&3, 42), 0);
    assert_eq!(map.get_value_or_none(&3), Some(0));
}

#[test]
fn persistent_maps_share_the_interface() {
    let base: im::OrdMap<&str, Vec<u8>> = im::OrdMap::new();
    let updated = base.update("bytes", vec![1, 2]);
    assert_eq!(base.get_value_or_default(&"bytes"), Vec::<u8>::new());
    assert_eq!(updated.get_value_or_default(&"bytes"), vec![1, 2]);

    let fallback = vec![9];
    assert_eq!(updated.get_ref_or(&"missing", &fallback), &vec![9]);
}

#[test]
fn generic_over_any_lookup() {
    fn describe<M: MapLookup<u32, &'static str>>(map: &M) -> &'static str {
        map.get_value_or(&1, "unknown")
    }

    let std_map = HashMap::from([(1, "one")]);
    let im_map: im::HashMap<u32, &str> = im::HashMap::new();
    assert_eq!(describe(&std_map), "one");
    assert_eq!(describe(&im_map), "unknown");
}

// =============================================================================
// Pairs
// =============================================================================

#[test]
fn pairs_iterate_in_map_order() {
    let map = BTreeMap::from([(2, 'b'), (1, 'a')]);
    let rendered: Vec<String> = map.pairs().map(|p| p.to_string()).collect();
    assert_eq!(rendered, vec!["[1, a]", "[2, b]"]);
}

#[test]
fn pair_deconstruct_and_sort() {
    let mut pairs = vec![KeyValuePair::new("b", 2), KeyValuePair::new("a", 9)];
    pairs.sort();
    let (key, value) = pairs[0].deconstruct();
    assert_eq!((key, value), ("a", 9));
}
