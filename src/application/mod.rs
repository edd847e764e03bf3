mod app_context;
pub mod ports;
pub mod services;

pub use app_context::AppContext;
