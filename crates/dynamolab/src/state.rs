//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds repository trait objects so handlers never know
//! which backend was compiled in.

use std::sync::Arc;

use dynamolab_core::storage::{MusicRepository, NoteRepository};

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler. Both fields usually point at the same
/// backend instance.
#[derive(Clone)]
pub struct AppState {
    /// Note repository.
    pub note_repo: Arc<dyn NoteRepository>,
    /// Music repository.
    pub music_repo: Arc<dyn MusicRepository>,
}

impl AppState {
    /// Creates a new AppState from explicit repositories.
    pub fn build(
        note_repo: Arc<dyn NoteRepository>,
        music_repo: Arc<dyn MusicRepository>,
    ) -> Self {
        Self {
            note_repo,
            music_repo,
        }
    }
}

// ============================================================================
// Factory functions for the compiled-in backend
// ============================================================================

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::storage::dynamodb::create_client;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState backed by DynamoDB.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let client = create_client(config).await;
            let repo = Arc::new(DynamoDbRepository::new(
                client,
                &config.notes_table_name,
                &config.music_table_name,
            ));

            tracing::info!(
                notes_table = %repo.notes_table(),
                music_table = %repo.music_table(),
                "Using DynamoDB storage"
            );

            Ok(Self::build(repo.clone(), repo))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for running locally without any AWS resources.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());

            tracing::info!(
                notes_table = %config.notes_table_name,
                music_table = %config.music_table_name,
                "Using in-memory storage, table names are ignored"
            );

            Ok(Self::build(repo.clone(), repo))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl Default for AppState {
        /// Creates an AppState with in-memory storage for testing.
        fn default() -> Self {
            let repo = Arc::new(InMemoryRepository::new());
            Self::build(repo.clone(), repo)
        }
    }
}
