//! Eddystone-URL frames
//!
//! URL schema compression and assembly of the advertising data that carries
//! an Eddystone-URL frame.

pub mod constants;
pub mod frame;
pub mod url;

#[cfg(test)]
mod tests;

pub use frame::{AdFlags, AdvertisingData};
pub use url::encode_url;
