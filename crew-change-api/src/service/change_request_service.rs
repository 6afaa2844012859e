use async_trait::async_trait;

use crate::domain::{ChangeLog, ChangeRequest, ChangeRequestPayload};
use crate::error::ApiResult;

/// Persistence and approval of submitted change requests.
///
/// Every mutation appends exactly one [`ChangeLog`] entry in the same atomic step
/// as the mutation itself. Read operations return owned copies; nothing handed
/// out can alter the store.
///
/// # Example
/// ```ignore
/// let request = service.create(payload, "2nd Engineer").await?;
/// if !service.approve(request.id, "Chief Engineer", None).await? {
///     // already gone, e.g. stale UI state
/// }
/// ```
#[async_trait]
pub trait ChangeRequestService: Send + Sync {
    /// Persist a payload as a new request with status `Pending Approval` and a `created` log entry.
    ///
    /// # Returns
    /// * `Ok(ChangeRequest)` - The stored request with its assigned id
    /// * `Err(ApiError::ValidationError)` - The payload has no target type or no changes
    async fn create(&self, payload: ChangeRequestPayload, requested_by: &str) -> ApiResult<ChangeRequest>;

    /// Approve a request and append an `approved` log entry.
    ///
    /// # Returns
    /// * `Ok(true)` - The request was approved
    /// * `Ok(false)` - No request with this id exists; nothing was logged
    async fn approve(&self, id: i64, approved_by: &str, comments: Option<String>) -> ApiResult<bool>;

    /// Reject a request with a reason and append a `rejected` log entry.
    ///
    /// # Returns
    /// * `Ok(true)` - The request was rejected
    /// * `Ok(false)` - No request with this id exists; nothing was logged
    async fn reject(&self, id: i64, rejected_by: &str, reason: &str) -> ApiResult<bool>;

    async fn list(&self) -> ApiResult<Vec<ChangeRequest>>;

    async fn list_by_category(&self, category: &str) -> ApiResult<Vec<ChangeRequest>>;

    async fn get_by_id(&self, id: i64) -> ApiResult<Option<ChangeRequest>>;

    /// The whole audit trail in append order.
    async fn get_audit_log(&self) -> ApiResult<Vec<ChangeLog>>;

    /// Audit entries of one request in append order.
    async fn get_audit_log_for(&self, change_request_id: i64) -> ApiResult<Vec<ChangeLog>>;

    /// Recompute the hash chain of one request's audit entries.
    ///
    /// # Returns
    /// * `Ok(true)` - Every entry hashes to its stored value and links to its predecessor
    /// * `Ok(false)` - The chain is broken
    /// * `Err(ApiError::NotFound)` - No request with this id exists
    async fn verify_audit_log(&self, change_request_id: i64) -> ApiResult<bool>;
}
