use crate::models::change_request::ChangeRequestModel;

use super::{Create, FindByCategory, ListAll, Load, LoadAudits, LoadBatch, Update};

/// Everything the change request service needs from a storage backend.
///
/// Implemented automatically for any type that implements the individual traits.
pub trait ChangeRequestRepository:
    Create<ChangeRequestModel>
    + Update<ChangeRequestModel>
    + Load<ChangeRequestModel>
    + LoadBatch<ChangeRequestModel>
    + ListAll<ChangeRequestModel>
    + FindByCategory<ChangeRequestModel>
    + LoadAudits<ChangeRequestModel>
{
}

impl<R> ChangeRequestRepository for R where
    R: Create<ChangeRequestModel>
        + Update<ChangeRequestModel>
        + Load<ChangeRequestModel>
        + LoadBatch<ChangeRequestModel>
        + ListAll<ChangeRequestModel>
        + FindByCategory<ChangeRequestModel>
        + LoadAudits<ChangeRequestModel>
{
}
