//! Market listings (IPOs, daily movers) served through the TTL cache.

mod listings_model;
mod listings_service;


pub use listings_model::Fetched;
pub use listings_service::ListingService;
