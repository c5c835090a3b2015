//! Test helpers shared by unit, behaviour, and property tests.

use std::collections::HashSet;

use crate::{DEMO_FOODS, RankingStore, seed_store};

/// Build a store filled with [`DEMO_FOODS`].
#[must_use]
pub fn demo_store() -> RankingStore {
    let store = RankingStore::new();
    seed_store(&store, &DEMO_FOODS);
    store
}

/// Panic unless the name index and the cuisine buckets agree.
///
/// Checks that every food has exactly one bucket key carrying its current
/// rating, that no bucket key is orphaned, and that each bucket is ordered by
/// rating descending then name ascending.
pub fn assert_consistent(store: &RankingStore) {
    let foods = store.foods();
    let mut seen = HashSet::new();

    for cuisine in store.bucket_names() {
        let keys = store.bucket_keys(&cuisine);
        for pair in keys.windows(2) {
            if let [(high_rating, high_name), (low_rating, low_name)] = pair {
                let ordered = high_rating > low_rating
                    || (high_rating == low_rating && high_name < low_name);
                assert!(
                    ordered,
                    "bucket {cuisine} out of order: ({high_rating}, {high_name}) before ({low_rating}, {low_name})"
                );
            }
        }
        for (rating, name) in keys {
            let Some(food) = foods.iter().find(|food| food.name == name) else {
                panic!("bucket {cuisine} holds orphan key {name}");
            };
            assert_eq!(
                food.cuisine, cuisine,
                "food {name} is in bucket {cuisine} but belongs to {}",
                food.cuisine
            );
            assert_eq!(
                food.rating, rating,
                "bucket {cuisine} holds stale rating {rating} for {name}"
            );
            assert!(seen.insert(name.clone()), "food {name} has two bucket keys");
        }
    }

    assert_eq!(
        seen.len(),
        foods.len(),
        "every food must have exactly one bucket key"
    );
    assert_eq!(store.bucket_entries(), foods.len());
}
