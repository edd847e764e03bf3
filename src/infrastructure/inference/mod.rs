mod conversion_engine_factory;
mod http_conversion_engine;
mod mock_conversion_engine;

pub use conversion_engine_factory::ConversionEngineFactory;
pub use http_conversion_engine::HttpConversionEngine;
pub use mock_conversion_engine::MockConversionEngine;
