//! Amazon Connect Cases.

pub mod model;
mod operations;

pub use operations::*;

use crate::client::ServiceMetadata;
use crate::operation::Protocol;

/// Service metadata for Amazon Connect Cases.
pub static METADATA: ServiceMetadata = ServiceMetadata {
    service_id: "ConnectCases",
    endpoint_prefix: "cases",
    signing_name: "cases",
    api_version: "2022-10-03",
    protocol: Protocol::RestJson1,
    default_headers: &[],
};

crate::define_client! {
    /// Client for Amazon Connect Cases.
    pub struct ConnectCasesClient;
    metadata = METADATA;
    operations {
        /// Create a Cases domain.
        create_domain, create_domain_callable, create_domain_async => CreateDomainRequest;
        /// Describe a domain.
        get_domain, get_domain_callable, get_domain_async => GetDomainRequest;
        /// List domains in the account.
        list_domains, list_domains_callable, list_domains_async => ListDomainsRequest;
        /// Delete a domain.
        delete_domain, delete_domain_callable, delete_domain_async => DeleteDomainRequest;
        /// Create a case from a template.
        create_case, create_case_callable, create_case_async => CreateCaseRequest;
        /// Read selected fields of a case.
        get_case, get_case_callable, get_case_async => GetCaseRequest;
        /// Change field values of a case.
        update_case, update_case_callable, update_case_async => UpdateCaseRequest;
        /// Search cases in a domain.
        search_cases, search_cases_callable, search_cases_async => SearchCasesRequest;
        /// Create a custom field.
        create_field, create_field_callable, create_field_async => CreateFieldRequest;
        /// List the fields of a domain.
        list_fields, list_fields_callable, list_fields_async => ListFieldsRequest;
        /// Create a case template.
        create_template, create_template_callable, create_template_async => CreateTemplateRequest;
        /// Attach a comment or contact to a case.
        create_related_item, create_related_item_callable, create_related_item_async => CreateRelatedItemRequest;
        /// Add tags to a resource.
        tag_resource, tag_resource_callable, tag_resource_async => TagResourceRequest;
        /// Remove tags from a resource.
        untag_resource, untag_resource_callable, untag_resource_async => UntagResourceRequest;
        /// List the tags of a resource.
        list_tags_for_resource, list_tags_for_resource_callable, list_tags_for_resource_async => ListTagsForResourceRequest;
    }
}
