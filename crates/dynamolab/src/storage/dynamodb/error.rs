//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `dynamolab_core::storage`.
//! Retries already happened inside the SDK by the time an error reaches these
//! functions, so every mapping is final for the current request.

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use dynamolab_core::storage::RepositoryError;

/// Extract the most useful message from an SDK error.
///
/// Service errors carry a message from DynamoDB itself; transport errors are
/// rendered with their full source chain.
fn sdk_message<E, R>(err: &SdkError<E, R>) -> String
where
    E: ProvideErrorMetadata + Error + 'static,
    R: Debug,
{
    match err {
        SdkError::ServiceError(service) => service
            .err()
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| service.err().to_string()),
        other => DisplayErrorContext(other).to_string(),
    }
}

/// True when the request never produced a response from DynamoDB.
fn is_connection_error<E, R>(err: &SdkError<E, R>) -> bool {
    matches!(
        err,
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_)
    )
}

/// Map a conditional PutItem SDK error on note creation.
///
/// A failed guard is the expected duplicate-key outcome.
pub fn map_create_note_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    id: impl Into<String>,
) -> RepositoryError {
    if is_connection_error(&err) {
        return RepositoryError::ConnectionFailed(sdk_message(&err));
    }
    let message = sdk_message(&err);
    match err.into_service_error() {
        PutItemError::ConditionalCheckFailedException(_) => {
            RepositoryError::ConditionalCheckFailed {
                entity_type: "Note",
                id: id.into(),
            }
        }
        PutItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed(format!("Table not found: {message}"))
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed(format!("Throughput exceeded: {message}"))
        }
        PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed(format!("Request limit exceeded: {message}"))
        }
        PutItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed(format!("DynamoDB internal server error: {message}"))
        }
        _ => RepositoryError::QueryFailed(format!("PutItem failed: {message}")),
    }
}

/// Map an UpdateItem SDK error. Every fault is reported as a failed update.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
    id: impl Into<String>,
) -> RepositoryError {
    RepositoryError::UpdateFailed {
        id: id.into(),
        reason: sdk_message(&err),
    }
}

/// Map a Query SDK error, keeping DynamoDB's own message.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> RepositoryError {
    if is_connection_error(&err) {
        return RepositoryError::ConnectionFailed(sdk_message(&err));
    }
    RepositoryError::QueryFailed(sdk_message(&err))
}

/// Map a DeleteItem SDK error. Every fault is reported against the user.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
    user_id: impl Into<String>,
) -> RepositoryError {
    RepositoryError::DeleteFailed {
        user_id: user_id.into(),
        reason: sdk_message(&err),
    }
}

/// Map an unconditional PutItem SDK error (music seeding).
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    if is_connection_error(&err) {
        return RepositoryError::ConnectionFailed(sdk_message(&err));
    }
    RepositoryError::QueryFailed(format!("PutItem failed: {}", sdk_message(&err)))
}

/// Map a GetItem SDK error.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    if is_connection_error(&err) {
        return RepositoryError::ConnectionFailed(sdk_message(&err));
    }
    RepositoryError::QueryFailed(format!("GetItem failed: {}", sdk_message(&err)))
}

/// Map a Scan SDK error.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    if is_connection_error(&err) {
        return RepositoryError::ConnectionFailed(sdk_message(&err));
    }
    RepositoryError::QueryFailed(format!("Scan failed: {}", sdk_message(&err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::error::{
        ConditionalCheckFailedException, ResourceNotFoundException,
    };

    #[test]
    fn test_conditional_check_failed_maps_to_guard_violation() {
        let service_err = PutItemError::ConditionalCheckFailedException(
            ConditionalCheckFailedException::builder()
                .message("The conditional request failed")
                .build(),
        );
        let err: SdkError<PutItemError, ()> = SdkError::service_error(service_err, ());

        let mapped = map_create_note_error(err, "u1#100");

        assert_eq!(
            mapped,
            RepositoryError::ConditionalCheckFailed {
                entity_type: "Note",
                id: "u1#100".to_string(),
            }
        );
    }

    #[test]
    fn test_create_fault_keeps_store_message() {
        let service_err = PutItemError::ResourceNotFoundException(
            ResourceNotFoundException::builder()
                .message("Requested resource not found")
                .build(),
        );
        let err: SdkError<PutItemError, ()> = SdkError::service_error(service_err, ());

        let mapped = map_create_note_error(err, "u1#100");

        assert_eq!(
            mapped,
            RepositoryError::QueryFailed(
                "Table not found: Requested resource not found".to_string()
            )
        );
    }

    #[test]
    fn test_timeout_maps_to_connection_failed() {
        let err: SdkError<QueryError, ()> = SdkError::timeout_error("deadline elapsed");

        let mapped = map_query_error(err);

        assert!(matches!(mapped, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_update_fault_uses_domain_message() {
        let err: SdkError<UpdateItemError, ()> = SdkError::timeout_error("deadline elapsed");

        let mapped = map_update_item_error(err, "u1#100");

        assert_eq!(
            mapped.to_string(),
            "it was not possible to update the requested entry"
        );
    }

    #[test]
    fn test_delete_fault_names_the_user() {
        let err: SdkError<DeleteItemError, ()> = SdkError::timeout_error("deadline elapsed");

        let mapped = map_delete_item_error(err, "u1");

        assert_eq!(mapped.to_string(), "items for u1 cannot be deleted");
    }
}
