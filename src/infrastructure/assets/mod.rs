mod http_asset_source;

pub use http_asset_source::HttpAssetSource;
