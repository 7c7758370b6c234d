//! Property-based tests for the sync reducer.
//!
//! The reducer is a pure, total function over `(collection, event)`, so its
//! invariants can be checked independently of any transport: duplicate
//! inserts are idempotent, absent-id deletes and updates are no-ops by
//! value, ordering of survivors is preserved, and ids stay unique under
//! arbitrary event sequences.

use proptest::prelude::*;

use linkvault::managers::sync_manager::apply;
use linkvault::types::bookmark::Bookmark;
use linkvault::types::event::ChangeEvent;

fn record(id: u32, created_at: i64) -> Bookmark {
    Bookmark {
        id: format!("bm-{}", id),
        title: format!("Bookmark {}", id),
        url: format!("https://example.com/{}", id),
        owner_id: "alice".to_string(),
        created_at,
    }
}

/// Strategy: a collection of records with unique ids, newest first.
fn arb_collection() -> impl Strategy<Value = Vec<Bookmark>> {
    proptest::collection::btree_set(0u32..50, 0..10).prop_map(|ids| {
        ids.into_iter()
            .rev()
            .enumerate()
            .map(|(i, id)| record(id, 1_000 - i as i64))
            .collect()
    })
}

/// Strategy: an arbitrary change event over the same id space.
fn arb_event() -> impl Strategy<Value = ChangeEvent> {
    (0u32..50, 0i64..2_000).prop_flat_map(|(id, at)| {
        prop_oneof![
            Just(ChangeEvent::Inserted(record(id, at))),
            Just(ChangeEvent::Deleted {
                id: format!("bm-{}", id)
            }),
            Just(ChangeEvent::Updated(record(id, at))),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Applying the same insert twice is the same as applying it once.
    #[test]
    fn insert_is_idempotent(collection in arb_collection(), id in 0u32..50, at in 0i64..2_000) {
        let event = ChangeEvent::Inserted(record(id, at));
        let once = apply(collection, event.clone());
        let twice = apply(once.clone(), event);
        prop_assert_eq!(once, twice);
    }

    // Deleting or updating an absent id returns the collection unchanged by value.
    #[test]
    fn absent_id_is_a_noop(collection in arb_collection(), id in 50u32..100, at in 0i64..2_000) {
        let deleted = apply(collection.clone(), ChangeEvent::Deleted { id: format!("bm-{}", id) });
        prop_assert_eq!(&deleted, &collection);

        let updated = apply(collection.clone(), ChangeEvent::Updated(record(id, at)));
        prop_assert_eq!(&updated, &collection);
    }

    // A delete followed by an insert never reorders surviving entries; the
    // new record lands at the front and everything else keeps its relative
    // position.
    #[test]
    fn survivors_keep_their_order(
        collection in arb_collection(),
        delete_id in 0u32..50,
        insert_id in 50u32..100,
        at in 0i64..2_000,
    ) {
        let after_delete = apply(collection.clone(), ChangeEvent::Deleted { id: format!("bm-{}", delete_id) });
        let after_insert = apply(after_delete, ChangeEvent::Inserted(record(insert_id, at)));

        prop_assert_eq!(after_insert[0].id.clone(), format!("bm-{}", insert_id));

        let survivors: Vec<&str> = after_insert[1..].iter().map(|b| b.id.as_str()).collect();
        let expected: Vec<&str> = collection
            .iter()
            .map(|b| b.id.as_str())
            .filter(|id| *id != format!("bm-{}", delete_id))
            .collect();
        prop_assert_eq!(survivors, expected);
    }

    // Ids stay unique no matter what event sequence is applied.
    #[test]
    fn ids_stay_unique(
        collection in arb_collection(),
        events in proptest::collection::vec(arb_event(), 0..20),
    ) {
        let mut current = collection;
        for event in events {
            current = apply(current, event);
            let mut seen = std::collections::HashSet::new();
            for b in &current {
                prop_assert!(seen.insert(b.id.clone()), "duplicate id {}", b.id);
            }
        }
    }

    // An update never changes the collection's length or order, only the
    // matched record's contents.
    #[test]
    fn update_preserves_shape(collection in arb_collection(), id in 0u32..50, at in 0i64..2_000) {
        let before: Vec<String> = collection.iter().map(|b| b.id.clone()).collect();
        let after = apply(collection, ChangeEvent::Updated(record(id, at)));
        let after_ids: Vec<String> = after.iter().map(|b| b.id.clone()).collect();
        prop_assert_eq!(before, after_ids);
    }
}
