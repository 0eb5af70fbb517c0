#![deny(missing_docs)]
//! A fixed-capacity hash table.
//!
//! Keys are spread over a fixed number of buckets by hashing their `Display`
//! rendering, and colliding keys share a bucket as a chain.

pub use error::{Result, TableError};
pub use hash::{hash_index, scalar_hash};
pub use key::{model_description, KeyKind, ModelKey};
pub use table::{BucketLayout, HashTable};

mod error;
mod hash;
mod key;
mod table;
