//! User store module.
//!
//! This module holds the user records created by the form:
//! - `UserStore` trait describing the `create`/`find` contract
//! - `MemoryStore`, an in-memory implementation living as long as the process
//! - Seed records simulating already registered users

mod error;

pub use error::StoreError;

use log::*;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Defines user record data structure.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
}

/// Key-value collaborator holding user records keyed by email.
///
pub trait UserStore {
    /// Store a new record under `email`, assigning it the next identifier.
    ///
    fn create(&self, email: &str, password_hash: &str) -> Result<Record, StoreError>;

    /// Return the record stored under `email`.
    ///
    fn find(&self, email: &str) -> Result<Record, StoreError>;
}

struct Inner {
    records: HashMap<String, Record>,
    next_id: i64,
}

/// In-memory store. Both operations run under one lock so concurrent forms
/// cannot create the same email twice.
///
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Return a new empty store whose first identifier is 1.
    ///
    pub fn new() -> Self {
        MemoryStore {
            inner: Mutex::new(Inner {
                records: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Return a store pre-populated with the example users.
    ///
    pub fn seeded() -> Self {
        let store = MemoryStore::new();
        {
            let mut inner = store.inner.lock();
            for (key, record) in seed_records() {
                inner.next_id = inner.next_id.max(record.id + 1);
                inner.records.insert(key.to_string(), record);
            }
            debug!(
                "Seeded store with {} users, next id is {}",
                inner.records.len(),
                inner.next_id
            );
        }
        store
    }

    /// Return the number of stored records.
    ///
    pub fn len(&self) -> usize {
        self.inner.lock().records.len()
    }

    /// Return true if no record is stored.
    ///
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        MemoryStore::new()
    }
}

impl UserStore for MemoryStore {
    fn create(&self, email: &str, password_hash: &str) -> Result<Record, StoreError> {
        let mut inner = self.inner.lock();
        if inner.records.contains_key(email) {
            return Err(StoreError::AlreadyExists {
                email: email.to_string(),
            });
        }

        let record = Record {
            id: inner.next_id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        };
        inner.records.insert(email.to_string(), record.clone());
        inner.next_id += 1;

        Ok(record)
    }

    fn find(&self, email: &str) -> Result<Record, StoreError> {
        self.inner
            .lock()
            .records
            .get(email)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                email: email.to_string(),
            })
    }
}

/// Example users keyed by email. The last key does not match its record's
/// email; lookups go by key only.
///
fn seed_records() -> Vec<(&'static str, Record)> {
    let record = |id: i64, email: &str, password_hash: &str| Record {
        id,
        email: email.to_string(),
        password_hash: password_hash.to_string(),
    };
    vec![
        ("tac@hi.com", record(1, "tac@hi.com", "thankY*Utac0")),
        ("jay@hi.com", record(2, "jay@hi.com", "+h3ll0J_y$")),
        ("john@hi.com", record(3, "john@hi.com", "superDOE1$")),
        ("alice@hi.com", record(4, "gopher@hi.com", "go4£v£rRustn3v3r")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;
    use std::sync::Arc;

    #[test]
    fn seeded_store_has_four_records() {
        let store = MemoryStore::seeded();
        assert_eq!(store.len(), 4);
        assert_eq!(store.find("tac@hi.com").map(|r| r.id), Ok(1));
        assert_eq!(store.find("john@hi.com").map(|r| r.id), Ok(3));
    }

    #[test]
    fn seeded_store_keeps_mismatched_key() {
        let store = MemoryStore::seeded();
        let record = store.find("alice@hi.com").unwrap();
        assert_eq!(record.id, 4);
        assert_eq!(record.email, "gopher@hi.com");
        assert!(matches!(
            store.find("gopher@hi.com"),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn create_continues_after_highest_seeded_id() {
        let store = MemoryStore::seeded();
        let first = store.create("new@test.com", "hash").unwrap();
        let second = store.create("other@test.com", "hash").unwrap();
        assert_eq!(first.id, 5);
        assert_eq!(second.id, 6);
        assert_eq!(store.find("new@test.com"), Ok(first));
    }

    #[test]
    fn create_rejects_existing_email() {
        let store = MemoryStore::seeded();
        let result = store.create("jay@hi.com", "hash");
        assert_eq!(
            result,
            Err(StoreError::AlreadyExists {
                email: "jay@hi.com".to_string()
            })
        );
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn empty_store_starts_at_one() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        let email: String = SafeEmail().fake();
        assert_eq!(store.create(&email, "hash").map(|r| r.id), Ok(1));
    }

    #[test]
    fn find_missing_email() {
        let store = MemoryStore::new();
        let email: String = SafeEmail().fake();
        assert_eq!(store.find(&email), Err(StoreError::NotFound { email }));
    }

    #[test]
    fn concurrent_creates_for_same_email_succeed_once() {
        let store = Arc::new(MemoryStore::seeded());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.create("race@test.com", "hash").is_ok())
            })
            .collect();
        let created = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(created, 1);
        assert_eq!(store.len(), 5);
    }
}
