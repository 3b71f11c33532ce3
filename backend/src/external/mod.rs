//! Clients for external collaborators

pub mod storefront;

pub use storefront::StorefrontClient;
