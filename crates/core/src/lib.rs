//! Core types and storage contracts for dynamolab.
//!
//! Everything in this crate is pure: domain types, validation, the storage
//! error taxonomy and the repository traits that storage backends implement.

pub mod music;
pub mod note;
pub mod storage;
