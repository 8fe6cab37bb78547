use crate::modules::calendar::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::calendar::core::period::Period;
use crate::modules::calendar::core::ports::{EventStore, StoreError};
use crate::tests::fixtures::events::{EventBuilder, ymd};
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_for_one_user_are_all_kept() {
    let store = Arc::new(InMemoryEventStore::new());

    let tasks: Vec<_> = (1..=64)
        .map(|event_id| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .create(EventBuilder::new().event_id(event_id).build())
                    .await
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(store.count_for_user(1).await, 64);
    let mut ids: Vec<i64> = store
        .query(1, ymd(2020, 1, 1), Period::Month)
        .await
        .unwrap()
        .into_iter()
        .map(|event| event.event_id)
        .collect();
    ids.sort();
    assert_eq!(ids, (1..=64).collect::<Vec<i64>>());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_duplicate_creates_admit_exactly_one() {
    let store = Arc::new(InMemoryEventStore::new());

    let tasks: Vec<_> = (0..16)
        .map(|n| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .create(EventBuilder::new().title(format!("attempt {n}")).build())
                    .await
            })
        })
        .collect();

    let mut accepted = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(()) => accepted += 1,
            Err(err) => assert_eq!(
                err,
                StoreError::DuplicateEvent {
                    user_id: 1,
                    event_id: 1
                }
            ),
        }
    }

    assert_eq!(accepted, 1);
    assert_eq!(store.count_for_user(1).await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn interleaved_create_and_delete_leave_a_consistent_store() {
    let store = Arc::new(InMemoryEventStore::new());
    for event_id in 1..=32 {
        store
            .create(EventBuilder::new().event_id(event_id).build())
            .await
            .unwrap();
    }

    let deletes: Vec<_> = (1..=16)
        .map(|event_id| {
            let store = store.clone();
            tokio::spawn(async move { store.delete(1, event_id).await })
        })
        .collect();
    let creates: Vec<_> = (33..=48)
        .map(|event_id| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .create(EventBuilder::new().event_id(event_id).build())
                    .await
            })
        })
        .collect();

    for task in deletes {
        let removed = task.await.unwrap().unwrap();
        assert!(removed.event_id <= 16);
    }
    for task in creates {
        task.await.unwrap().unwrap();
    }

    assert_eq!(store.count_for_user(1).await, 32);
    let mut ids: Vec<i64> = store
        .query(1, ymd(2020, 1, 1), Period::Day)
        .await
        .unwrap()
        .into_iter()
        .map(|event| event.event_id)
        .collect();
    ids.sort();
    assert_eq!(ids, (17..=48).collect::<Vec<i64>>());
}
