//! Amazon FinSpace public data API.

pub mod model;
mod operations;

pub use operations::*;

use crate::client::ServiceMetadata;
use crate::operation::Protocol;

/// Service metadata for FinSpace Data.
pub static METADATA: ServiceMetadata = ServiceMetadata {
    service_id: "finspace data",
    endpoint_prefix: "finspace-api",
    signing_name: "finspace-api",
    api_version: "2020-07-13",
    protocol: Protocol::RestJson1,
    default_headers: &[],
};

crate::define_client! {
    /// Client for the FinSpace data API.
    pub struct FinSpaceDataClient;
    metadata = METADATA;
    operations {
        /// Create a dataset.
        create_dataset, create_dataset_callable, create_dataset_async => CreateDatasetRequest;
        /// Describe a dataset.
        get_dataset, get_dataset_callable, get_dataset_async => GetDatasetRequest;
        /// List datasets.
        list_datasets, list_datasets_callable, list_datasets_async => ListDatasetsRequest;
        /// Delete a dataset.
        delete_dataset, delete_dataset_callable, delete_dataset_async => DeleteDatasetRequest;
        /// Ingest data into a dataset.
        create_changeset, create_changeset_callable, create_changeset_async => CreateChangesetRequest;
        /// Describe a changeset.
        get_changeset, get_changeset_callable, get_changeset_async => GetChangesetRequest;
        /// List the changesets of a dataset.
        list_changesets, list_changesets_callable, list_changesets_async => ListChangesetsRequest;
        /// Issue temporary programmatic credentials.
        get_programmatic_access_credentials, get_programmatic_access_credentials_callable, get_programmatic_access_credentials_async => GetProgrammaticAccessCredentialsRequest;
        /// Get a temporary S3 working location.
        get_working_location, get_working_location_callable, get_working_location_async => GetWorkingLocationRequest;
        /// Create a user.
        create_user, create_user_callable, create_user_async => CreateUserRequest;
        /// Describe a user.
        get_user, get_user_callable, get_user_async => GetUserRequest;
        /// List users.
        list_users, list_users_callable, list_users_async => ListUsersRequest;
        /// Deny a user access.
        disable_user, disable_user_callable, disable_user_async => DisableUserRequest;
        /// Restore a user's access.
        enable_user, enable_user_callable, enable_user_async => EnableUserRequest;
    }
}
