//! AWS IoT SiteWise.

pub mod model;
mod operations;

pub use operations::*;

use crate::client::ServiceMetadata;
use crate::operation::Protocol;

/// Service metadata for IoT SiteWise.
pub static METADATA: ServiceMetadata = ServiceMetadata {
    service_id: "IoTSiteWise",
    endpoint_prefix: "iotsitewise",
    signing_name: "iotsitewise",
    api_version: "2019-12-02",
    protocol: Protocol::RestJson1,
    default_headers: &[],
};

crate::define_client! {
    /// Client for AWS IoT SiteWise.
    ///
    /// Operations are routed to the `api.`, `data.` or `monitor.` host
    /// unless host prefix injection is disabled in the configuration.
    pub struct IoTSiteWiseClient;
    metadata = METADATA;
    operations {
        /// Create an asset from a model.
        create_asset, create_asset_callable, create_asset_async => CreateAssetRequest;
        /// Describe an asset.
        describe_asset, describe_asset_callable, describe_asset_async => DescribeAssetRequest;
        /// Rename or redescribe an asset.
        update_asset, update_asset_callable, update_asset_async => UpdateAssetRequest;
        /// Delete an asset.
        delete_asset, delete_asset_callable, delete_asset_async => DeleteAssetRequest;
        /// List assets.
        list_assets, list_assets_callable, list_assets_async => ListAssetsRequest;
        /// Attach a child asset to a parent hierarchy.
        associate_assets, associate_assets_callable, associate_assets_async => AssociateAssetsRequest;
        /// Create an asset model.
        create_asset_model, create_asset_model_callable, create_asset_model_async => CreateAssetModelRequest;
        /// Describe an asset model.
        describe_asset_model, describe_asset_model_callable, describe_asset_model_async => DescribeAssetModelRequest;
        /// Ingest property values.
        batch_put_asset_property_value, batch_put_asset_property_value_callable, batch_put_asset_property_value_async => BatchPutAssetPropertyValueRequest;
        /// Read the latest value of a property.
        get_asset_property_value, get_asset_property_value_callable, get_asset_property_value_async => GetAssetPropertyValueRequest;
        /// Read the value history of a property.
        get_asset_property_value_history, get_asset_property_value_history_callable, get_asset_property_value_history_async => GetAssetPropertyValueHistoryRequest;
        /// Create a SiteWise Monitor portal.
        create_portal, create_portal_callable, create_portal_async => CreatePortalRequest;
        /// Describe a portal.
        describe_portal, describe_portal_callable, describe_portal_async => DescribePortalRequest;
    }
}
