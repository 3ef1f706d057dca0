#![no_std]
pub mod errors;
pub mod types;
pub mod validation;

pub use errors::Error;
pub use types::*;
pub use validation::*;

// Rental bounds
pub const MAX_RENTAL_HOURS: u32 = 24; // hard cap, no multi-day rentals
pub const SECONDS_PER_HOUR: u64 = 3600;

// Pricing bound: keeps price_per_hour * MAX_RENTAL_HOURS inside i128
pub const MAX_PRICE_PER_HOUR: i128 = i128::MAX / (MAX_RENTAL_HOURS as i128);

// Query bounds
pub const MAX_AVAILABLE_RESULTS: u32 = 100; // bounded scan for list_available_spaces
