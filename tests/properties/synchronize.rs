//! Property tests for selection synchronization.

use std::collections::HashMap;

use proptest::prelude::*;

use multiselect::{resolve_selection, DomainObject, ObjectCache, ObjectId, OptionRecord, SelectionEntry};

#[derive(Debug)]
struct MapCache(HashMap<ObjectId, DomainObject>);

impl ObjectCache for MapCache {
    fn find_by_id(&self, id: &ObjectId) -> Option<DomainObject> {
        self.0.get(id).cloned()
    }
}

fn map_cache() -> impl Strategy<Value = MapCache> {
    proptest::collection::hash_map(0i64..10, "[a-z]{1,8}", 0..10).prop_map(|entries| {
        MapCache(
            entries
                .into_iter()
                .map(|(id, name)| {
                    (
                        ObjectId::Int(id),
                        DomainObject::new(id, name).with_attribute("cached", true),
                    )
                })
                .collect(),
        )
    })
}

fn selected_rows() -> impl Strategy<Value = Vec<OptionRecord>> {
    proptest::collection::vec(
        (0i64..14, any::<bool>()).prop_map(|(id, checked)| OptionRecord::new(id, "row", checked)),
        0..12,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the value has one entry per selected row, each equal to the
    /// cache's answer for that row's id.
    #[test]
    fn property_value_mirrors_cache_lookups(cache in map_cache(), selected in selected_rows()) {
        let value = resolve_selection(&selected, &cache);

        prop_assert_eq!(value.len(), selected.len());
        for (entry, row) in value.iter().zip(&selected) {
            match cache.find_by_id(&row.id) {
                Some(object) => prop_assert_eq!(entry, &SelectionEntry::Resolved(object)),
                None => prop_assert_eq!(entry, &SelectionEntry::CacheMiss { id: row.id.clone() }),
            }
        }
    }
}
