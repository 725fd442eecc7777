//! AWS WAF (WAFV2).

pub mod model;
mod operations;

pub use operations::*;

use crate::client::ServiceMetadata;
use crate::operation::Protocol;

/// Service metadata for WAFV2.
pub static METADATA: ServiceMetadata = ServiceMetadata {
    service_id: "WAFV2",
    endpoint_prefix: "wafv2",
    signing_name: "wafv2",
    api_version: "2019-07-29",
    protocol: Protocol::AwsJson {
        version: "1.1",
        target_prefix: "AWSWAF_20190729",
    },
    default_headers: &[],
};

crate::define_client! {
    /// Client for AWS WAF.
    pub struct Wafv2Client;
    metadata = METADATA;
    operations {
        /// Create an IP set.
        create_ip_set, create_ip_set_callable, create_ip_set_async => CreateIpSetRequest;
        /// Read an IP set and its lock token.
        get_ip_set, get_ip_set_callable, get_ip_set_async => GetIpSetRequest;
        /// Replace the addresses of an IP set.
        update_ip_set, update_ip_set_callable, update_ip_set_async => UpdateIpSetRequest;
        /// Delete an IP set.
        delete_ip_set, delete_ip_set_callable, delete_ip_set_async => DeleteIpSetRequest;
        /// List IP sets.
        list_ip_sets, list_ip_sets_callable, list_ip_sets_async => ListIpSetsRequest;
        /// Create a web ACL.
        create_web_acl, create_web_acl_callable, create_web_acl_async => CreateWebAclRequest;
        /// Read a web ACL and its lock token.
        get_web_acl, get_web_acl_callable, get_web_acl_async => GetWebAclRequest;
        /// Replace the definition of a web ACL.
        update_web_acl, update_web_acl_callable, update_web_acl_async => UpdateWebAclRequest;
        /// Delete a web ACL.
        delete_web_acl, delete_web_acl_callable, delete_web_acl_async => DeleteWebAclRequest;
        /// List web ACLs.
        list_web_acls, list_web_acls_callable, list_web_acls_async => ListWebAclsRequest;
        /// Protect a resource with a web ACL.
        associate_web_acl, associate_web_acl_callable, associate_web_acl_async => AssociateWebAclRequest;
        /// Remove the web ACL from a resource.
        disassociate_web_acl, disassociate_web_acl_callable, disassociate_web_acl_async => DisassociateWebAclRequest;
        /// Find the web ACL protecting a resource.
        get_web_acl_for_resource, get_web_acl_for_resource_callable, get_web_acl_for_resource_async => GetWebAclForResourceRequest;
        /// Price a set of rules in capacity units.
        check_capacity, check_capacity_callable, check_capacity_async => CheckCapacityRequest;
        /// Tag a resource.
        tag_resource, tag_resource_callable, tag_resource_async => TagResourceRequest;
        /// List the tags of a resource.
        list_tags_for_resource, list_tags_for_resource_callable, list_tags_for_resource_async => ListTagsForResourceRequest;
    }
}
