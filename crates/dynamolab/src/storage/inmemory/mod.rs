//! In-memory storage backend.
//!
//! Stores notes in a `BTreeMap` keyed by `(user_id, timestamp)`, with the
//! timestamp held as the same decimal string DynamoDB persists. Partition
//! reads therefore come back in the store's string order. The
//! conditional create is atomic because the whole map sits behind one write
//! lock.
//!
//! # Example
//!
//! ```rust,ignore
//! use dynamolab::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
