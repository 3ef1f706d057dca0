use soroban_sdk::{contracttype, Address, String};

/// A tokenized parking space listed on the marketplace.
///
/// `owner` mirrors the authoritative `SpaceOwner` linkage entry and is kept
/// in sync by `create_space` and `transfer_space`. `available` is the single
/// source of truth for "rentable right now".
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ParkingSpace {
    pub id: u64,
    pub location: String,
    pub price_per_hour: i128,
    pub owner: Address,
    pub available: bool,
    pub created_at: u64,
}

/// A time-bounded rental of one space.
///
/// Records are never deleted; `active` is flipped exactly once, by
/// `complete_rental`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Rental {
    pub id: u64,
    pub space_id: u64,
    pub renter: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub total_cost: i128,
    pub active: bool,
}
