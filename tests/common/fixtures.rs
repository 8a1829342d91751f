//! Reusable test data.

use multiselect::{DomainObject, SelectionEntry};

/// Four objects with ids 1-4, named "<id> item", each with an `extra` field
pub fn response() -> Vec<DomainObject> {
    (1..=4)
        .map(|i| DomainObject::new(i, format!("{} item", i)).with_attribute("extra", "extra"))
        .collect()
}

/// Value holding objects 2 and 3
pub fn value_2_3() -> Vec<SelectionEntry> {
    [2, 3]
        .into_iter()
        .map(|i| {
            DomainObject::new(i, format!("{} item", i))
                .with_attribute("extra", "extra")
                .into()
        })
        .collect()
}

/// The object every cache lookup of a `DeferredModel` returns by default
pub fn cached_object() -> DomainObject {
    DomainObject::new("testId", "testName").with_attribute("extra", "extra")
}

/// `response()` as the JSON a `JsonFileModel` reads
pub fn response_json() -> String {
    serde_json::to_string(&response()).unwrap()
}
