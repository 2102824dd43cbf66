//! Expiry, decoding, and write-failure behaviour of `ExpiringCache`.

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeDelta, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

use crate::cache::{
    adapters::InMemoryStore,
    ports::{KeyValueStore, StoreError},
    services::{CacheError, ExpiringCache},
};
use crate::clock::ManualClock;

type TestCache = ExpiringCache<InMemoryStore, ManualClock>;

const HOUR: Duration = Duration::from_secs(3_600);

#[fixture]
fn clock() -> ManualClock {
    ManualClock::new(
        Utc.with_ymd_and_hms(2024, 3, 10, 9, 30, 0)
            .single()
            .expect("valid timestamp"),
    )
}

fn cache_with(clock: &ManualClock, store: InMemoryStore) -> TestCache {
    ExpiringCache::new(store, Arc::new(clock.clone()), HOUR)
}

#[rstest]
fn put_then_get_returns_value(clock: ManualClock) {
    let cache = cache_with(&clock, InMemoryStore::new());
    cache.put("numbers", &vec![1, 2, 3]).expect("write succeeds");

    assert_eq!(cache.get::<Vec<i32>>("numbers"), Some(vec![1, 2, 3]));
}

#[rstest]
fn put_writes_data_and_timestamp_envelope(clock: ManualClock) {
    let store = InMemoryStore::new();
    let cache = cache_with(&clock, store.clone());
    cache.put("flag", &true).expect("write succeeds");

    let raw = store.get("flag").expect("entry written");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(value["data"], serde_json::json!(true));
    assert_eq!(
        value["timestamp"],
        serde_json::json!(1_710_063_000_000_i64)
    );
}

#[rstest]
fn missing_key_is_absent(clock: ManualClock) {
    let cache = cache_with(&clock, InMemoryStore::new());
    assert_eq!(cache.get::<String>("nothing"), None);
}

#[rstest]
fn entry_at_exact_ttl_is_still_fresh(clock: ManualClock) {
    let cache = cache_with(&clock, InMemoryStore::new());
    cache.put("k", &"v").expect("write succeeds");

    clock.advance(TimeDelta::milliseconds(3_600_000));

    assert_eq!(cache.get::<String>("k").as_deref(), Some("v"));
}

#[rstest]
fn entry_past_ttl_is_absent_and_removed(clock: ManualClock) {
    let store = InMemoryStore::new();
    let cache = cache_with(&clock, store.clone());
    let stale = format!(
        r#"{{"data":"old","timestamp":{}}}"#,
        clock.utc().timestamp_millis() - 3_600_001
    );
    store.set("k", stale).expect("seed succeeds");

    assert_eq!(cache.get::<String>("k"), None);
    assert!(!store.contains("k"));
}

#[rstest]
#[case::not_json("not json")]
#[case::missing_timestamp(r#"{"data":"x"}"#)]
#[case::wrong_data_type(r#"{"data":42,"timestamp":0}"#)]
fn corrupt_entry_is_absent_and_kept(clock: ManualClock, #[case] raw: &str) {
    let store = InMemoryStore::new();
    let cache = cache_with(&clock, store.clone());
    store.set("k", raw.to_owned()).expect("seed succeeds");

    assert_eq!(cache.get::<String>("k"), None);
    assert!(store.contains("k"));
}

#[rstest]
fn quota_failure_surfaces_persistence_error(clock: ManualClock) {
    let cache = cache_with(&clock, InMemoryStore::with_quota(4));

    let result = cache.put("key", &"a fairly long value");

    assert!(matches!(
        result,
        Err(CacheError::Persistence(StoreError::QuotaExceeded { .. }))
    ));
}
