//! Property tests for option reconciliation.

use std::collections::HashSet;

use proptest::prelude::*;

use multiselect::{prepare_options, DomainObject, ObjectId, SelectionEntry};

fn object_id() -> impl Strategy<Value = ObjectId> {
    prop_oneof![
        (0i64..12).prop_map(ObjectId::Int),
        "[a-c]{1,2}".prop_map(ObjectId::Str),
    ]
}

fn domain_object() -> impl Strategy<Value = DomainObject> {
    (object_id(), "[A-Za-z0-9 ]{0,12}", proptest::option::of("[a-z]{0,6}")).prop_map(
        |(id, name, extra)| {
            let object = DomainObject::new(id, name);
            match extra {
                Some(extra) => object.with_attribute("extra", extra),
                None => object,
            }
        },
    )
}

fn selection_entry() -> impl Strategy<Value = SelectionEntry> {
    prop_oneof![
        4 => domain_object().prop_map(SelectionEntry::Resolved),
        1 => object_id().prop_map(|id| SelectionEntry::CacheMiss { id }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one option per fetched object; selected counts the fetched
    /// objects whose id appears among the resolved value entries.
    #[test]
    fn property_sizes(
        raw in proptest::collection::vec(domain_object(), 0..16),
        value in proptest::collection::vec(selection_entry(), 0..8),
    ) {
        let result = prepare_options(&raw, &value);

        let value_ids: HashSet<&ObjectId> = value.iter().filter_map(|e| e.resolved_id()).collect();
        let expected_selected = raw.iter().filter(|o| value_ids.contains(&o.id)).count();

        prop_assert_eq!(result.options.len(), raw.len());
        prop_assert_eq!(result.selected.len(), expected_selected);
    }

    /// PROPERTY: rows project id and name only, in fetch order, and are
    /// checked exactly when their id is in the value.
    #[test]
    fn property_projection_and_checked(
        raw in proptest::collection::vec(domain_object(), 0..16),
        value in proptest::collection::vec(selection_entry(), 0..8),
    ) {
        let result = prepare_options(&raw, &value);

        for (option, object) in result.options.iter().zip(&raw) {
            prop_assert_eq!(&option.id, &object.id);
            prop_assert_eq!(&option.value, &object.name);

            let json = serde_json::to_value(option).unwrap();
            prop_assert_eq!(json.as_object().unwrap().len(), 3);

            let in_value = value.iter().any(|e| e.resolved_id() == Some(&object.id));
            prop_assert_eq!(option.checked, in_value);
        }
    }

    /// PROPERTY: selected is the checked subsequence of options.
    #[test]
    fn property_selected_is_checked_subsequence(
        raw in proptest::collection::vec(domain_object(), 0..16),
        value in proptest::collection::vec(selection_entry(), 0..8),
    ) {
        let result = prepare_options(&raw, &value);
        let checked: Vec<_> = result.options.iter().filter(|o| o.checked).cloned().collect();
        prop_assert_eq!(result.selected, checked);
    }
}
