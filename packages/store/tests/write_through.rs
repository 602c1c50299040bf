use store::{filter, FilterField, FilterSpec, MemoryStore, RecordDraft, RecordManager, RecordPatch};

use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Add(String, String, String),
    Update(u64, Option<String>, Option<String>),
    Remove(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        ("[a-zA-Z ]{0,12}", "[a-z0-9 ]{0,12}", "[0-9-]{0,10}")
            .prop_map(|(n, a, p)| Op::Add(n, a, p)),
        (1u64..20, proptest::option::of("[a-zA-Z]{0,8}"), proptest::option::of("[0-9]{0,8}"))
            .prop_map(|(id, n, p)| Op::Update(id, n, p)),
        (1u64..20).prop_map(Op::Remove),
    ]
}

fn apply(manager: &mut RecordManager<MemoryStore>, op: Op) {
    match op {
        Op::Add(n, a, p) => {
            manager.add(RecordDraft::new(n, a, p)).unwrap();
        }
        Op::Update(id, n, p) => {
            let patch = RecordPatch {
                full_name: n,
                phone_number: p,
                ..RecordPatch::default()
            };
            let existed = manager.get(id).is_some();
            match manager.update(id, patch) {
                Ok(record) => assert_eq!(record.id, id),
                Err(e) => assert!(!existed && e.is_not_found()),
            }
        }
        Op::Remove(id) => {
            manager.remove(id).unwrap();
            assert!(manager.get(id).is_none());
        }
    }
}

// =========================================================================
// Property-Based Tests - Write-through
// =========================================================================

proptest! {
    #[test]
    fn given_any_operation_sequence_when_reloaded_then_matches_memory(ops in prop::collection::vec(op(), 0..40)) {
        let store = MemoryStore::new();
        let mut manager = RecordManager::open(store.clone());

        for op in ops {
            apply(&mut manager, op);
            let reopened = RecordManager::open(store.clone());
            prop_assert_eq!(reopened.records(), manager.records());
        }
    }

    #[test]
    fn given_any_list_when_added_then_id_exceeds_all(ops in prop::collection::vec(op(), 0..40)) {
        let mut manager = RecordManager::open(MemoryStore::new());
        for op in ops {
            apply(&mut manager, op);
        }

        let max_before = manager.records().iter().map(|r| r.id).max();
        let record = manager.add(RecordDraft::default()).unwrap();
        match max_before {
            Some(max) => prop_assert!(record.id > max),
            None => prop_assert_eq!(record.id, 1),
        }
    }

    #[test]
    fn given_any_operation_sequence_then_ids_stay_unique(ops in prop::collection::vec(op(), 0..40)) {
        let mut manager = RecordManager::open(MemoryStore::new());
        for op in ops {
            apply(&mut manager, op);
        }

        let mut ids: Vec<u64> = manager.records().iter().map(|r| r.id).collect();
        let len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), len);
    }

    #[test]
    fn given_empty_value_when_filtered_then_identity(names in prop::collection::vec("[a-zA-Z]{0,10}", 0..20)) {
        let mut manager = RecordManager::open(MemoryStore::new());
        for name in names {
            manager.add(RecordDraft::new(name, "", "")).unwrap();
        }

        for field in FilterField::ALL {
            let all = filter(manager.records(), &FilterSpec::new(field, ""));
            prop_assert_eq!(all.as_slice(), manager.records());
        }
    }

    #[test]
    fn given_any_filter_then_result_is_ordered_subset(
        names in prop::collection::vec("[a-cA-C]{0,4}", 0..20),
        needle in "[a-c]{0,2}",
    ) {
        let mut manager = RecordManager::open(MemoryStore::new());
        for name in names {
            manager.add(RecordDraft::new(name, "", "")).unwrap();
        }

        let matched = filter(manager.records(), &FilterSpec::new(FilterField::FullName, needle));
        let mut remaining = manager.records().iter();
        for record in &matched {
            prop_assert!(remaining.any(|r| r == record));
        }
    }
}
