use std::fmt::Display;
use std::mem;
use std::ops::Index;

use log::{debug, trace};
use serde::Serialize;

use crate::hash::hash_index;
use crate::key::{self, ModelKey};
use crate::{Result, TableError};

#[derive(Clone, Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

// one chain, kept in insertion order
type Bucket<K, V> = Vec<Entry<K, V>>;

/// Snapshot of one bucket: its index and the rendered keys of its chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketLayout {
    /// bucket index
    pub index: usize,
    /// keys in chain order
    pub keys: Vec<String>,
}

/// A hash table with a fixed number of buckets.
///
/// Collisions are resolved by chaining: every bucket holds the entries whose
/// keys hash to it, and lookups scan that chain comparing keys for equality.
/// The bucket count is chosen at construction and never changes.
///
/// A value that may itself be missing is stored as `V = Option<T>`, so reads
/// return `Some(&None)` for "present but empty" and `None` for "not present".
///
/// ```rust
/// # use chainkv::HashTable;
/// let mut table = HashTable::new(5);
/// table.set("firstName".to_owned(), Some("Steve".to_owned()));
/// assert_eq!(table.get(&"firstName".to_owned()), Some(&"Steve".to_owned()));
///
/// table.set("firstName".to_owned(), None);
/// assert_eq!(table.get(&"firstName".to_owned()), None);
/// ```
#[derive(Clone, Debug)]
pub struct HashTable<K, V> {
    buckets: Vec<Bucket<K, V>>,
    len: usize,
}

impl<K: Eq + Display, V> HashTable<K, V> {
    /// Creates an empty table with `capacity` buckets.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use `try_new` when the capacity comes
    /// from user input.
    pub fn new(capacity: usize) -> HashTable<K, V> {
        assert!(capacity > 0, "capacity must be positive");
        debug!("Creating hash table with {} buckets", capacity);
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Vec::new);
        HashTable { buckets, len: 0 }
    }

    /// Like `new`, but returns `TableError::ZeroCapacity` instead of panicking.
    pub fn try_new(capacity: usize) -> Result<HashTable<K, V>> {
        if capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        Ok(HashTable::new(capacity))
    }

    /// number of buckets
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// number of stored entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// true if no entry is stored
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The bucket `key` lives in (or would live in).
    pub fn bucket_index(&self, key: &K) -> usize {
        hash_index(key, self.buckets.len())
    }

    /// Returns the value stored for `key`, or `None` if the key is absent.
    pub fn value(&self, key: &K) -> Option<&V> {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|entry| entry.key == *key)
            .map(|entry| &entry.value)
    }

    /// Mutable access to the value stored for `key`.
    pub fn value_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|entry| entry.key == *key)
            .map(|entry| &mut entry.value)
    }

    /// true if an entry for `key` exists
    pub fn contains_key(&self, key: &K) -> bool {
        self.value(key).is_some()
    }

    /// Stores `value` under `key`.
    ///
    /// An existing entry is updated in place and its previous value returned.
    /// Otherwise a new entry is appended to the end of the key's chain and
    /// `None` is returned.
    pub fn update_value(&mut self, value: V, key: K) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];
        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
            trace!("Updating key {} in bucket {}", key, index);
            return Some(mem::replace(&mut entry.value, value));
        }
        trace!("Inserting key {} into bucket {}", key, index);
        bucket.push(Entry { key, value });
        self.len += 1;
        None
    }

    /// Removes the entry for `key` and returns its value.
    ///
    /// Removing an absent key is a no-op that returns `None`.
    pub fn remove_value(&mut self, key: &K) -> Option<V> {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        let position = bucket.iter().position(|entry| entry.key == *key)?;
        trace!("Removing key {} from bucket {}", key, index);
        self.len -= 1;
        Some(bucket.remove(position).value)
    }

    /// get value for a key, same as `value`
    pub fn get(&self, key: &K) -> Option<&V> {
        self.value(key)
    }

    /// `Some` stores the value, `None` removes the key.
    /// Whatever was there before is dropped.
    pub fn set(&mut self, key: K, value: Option<V>) {
        match value {
            Some(value) => {
                self.update_value(value, key);
            }
            None => {
                self.remove_value(&key);
            }
        }
    }

    /// All entries, bucket by bucket. The order carries no meaning.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flatten()
            .map(|entry| (&entry.key, &entry.value))
    }

    /// Rendered keys of every bucket, in chain order.
    pub fn layout(&self) -> Vec<BucketLayout> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(index, bucket)| BucketLayout {
                index,
                keys: bucket.iter().map(|entry| entry.key.to_string()).collect(),
            })
            .collect()
    }

    /// See `chainkv::model_description`.
    pub fn model_description(&self, key: &K) -> Option<String>
    where
        K: ModelKey,
    {
        key::model_description(key)
    }
}

impl<K: Eq + Display, V> Index<&K> for HashTable<K, V> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is not in the table.
    fn index(&self, key: &K) -> &V {
        self.value(key).expect("key not found in hash table")
    }
}
