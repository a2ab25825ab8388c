//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `dynamolab_core::storage`. The implementation used by the server
//! is selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//! - `inmemory`: in-process backend, handy for running the server without AWS
//!
//! These features are mutually exclusive. The in-memory backend is always
//! compiled for tests.
//!
//! # Examples
//!
//! Build with DynamoDB (default):
//! ```bash
//! cargo build -p dynamolab
//! ```
//!
//! Build with the in-memory backend:
//! ```bash
//! cargo build -p dynamolab --no-default-features --features inmemory
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'dynamodb' feature. \
    Example: cargo build -p dynamolab --features dynamodb"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryRepository;
