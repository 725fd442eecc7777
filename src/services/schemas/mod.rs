//! Amazon EventBridge Schemas.

pub mod model;
mod operations;

pub use operations::*;

use crate::client::ServiceMetadata;
use crate::operation::Protocol;

/// Service metadata for EventBridge Schemas.
pub static METADATA: ServiceMetadata = ServiceMetadata {
    service_id: "schemas",
    endpoint_prefix: "schemas",
    signing_name: "schemas",
    api_version: "2019-12-02",
    protocol: Protocol::RestJson1,
    default_headers: &[],
};

crate::define_client! {
    /// Client for the EventBridge schema registry.
    pub struct SchemasClient;
    metadata = METADATA;
    operations {
        /// Create a registry.
        create_registry, create_registry_callable, create_registry_async => CreateRegistryRequest;
        /// Describe a registry.
        describe_registry, describe_registry_callable, describe_registry_async => DescribeRegistryRequest;
        /// Delete a registry.
        delete_registry, delete_registry_callable, delete_registry_async => DeleteRegistryRequest;
        /// List registries.
        list_registries, list_registries_callable, list_registries_async => ListRegistriesRequest;
        /// Create a schema.
        create_schema, create_schema_callable, create_schema_async => CreateSchemaRequest;
        /// Describe a schema version.
        describe_schema, describe_schema_callable, describe_schema_async => DescribeSchemaRequest;
        /// Delete a schema.
        delete_schema, delete_schema_callable, delete_schema_async => DeleteSchemaRequest;
        /// List the schemas of a registry.
        list_schemas, list_schemas_callable, list_schemas_async => ListSchemasRequest;
        /// Search schemas by keyword.
        search_schemas, search_schemas_callable, search_schemas_async => SearchSchemasRequest;
        /// Create a discoverer on an event bus.
        create_discoverer, create_discoverer_callable, create_discoverer_async => CreateDiscovererRequest;
        /// Describe a discoverer.
        describe_discoverer, describe_discoverer_callable, describe_discoverer_async => DescribeDiscovererRequest;
        /// Start a discoverer.
        start_discoverer, start_discoverer_callable, start_discoverer_async => StartDiscovererRequest;
        /// Stop a discoverer.
        stop_discoverer, stop_discoverer_callable, stop_discoverer_async => StopDiscovererRequest;
        /// Generate a code binding.
        put_code_binding, put_code_binding_callable, put_code_binding_async => PutCodeBindingRequest;
        /// Download the source of a code binding.
        get_code_binding_source, get_code_binding_source_callable, get_code_binding_source_async => GetCodeBindingSourceRequest;
        /// Export a schema in another format.
        export_schema, export_schema_callable, export_schema_async => ExportSchemaRequest;
    }
}
