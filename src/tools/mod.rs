// Pipeline stages, leaves first
pub mod fetch;
pub mod sitemap;
pub mod resolve;
pub mod extract;
pub mod batch;
