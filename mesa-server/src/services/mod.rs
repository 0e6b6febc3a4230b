//! Services - HTTP application assembly and the integration pathway

pub mod https;
pub mod integration;

pub use https::build_app;
pub use integration::IntegrationService;
