use soroban_sdk::contracterror;

/// Contract errors, surfaced to callers as `Error(Contract, #code)`.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// A mutating operation is already in progress
    ReentrantCall = 3,
    /// Location must be non-empty
    InvalidLocation = 4,
    /// Price must be positive and below the overflow bound
    InvalidPrice = 5,
    /// Duration must be between 1 and 24 hours
    InvalidDuration = 6,
    /// No space allocated under the given id
    SpaceNotFound = 7,
    /// No rental allocated under the given id
    RentalNotFound = 8,
    /// Space is currently rented
    SpaceNotAvailable = 9,
    /// Rental has already been completed
    RentalNotActive = 10,
    /// Caller is neither the renter nor the space owner
    Unauthorized = 11,
    /// Payment is below the total rental cost
    InsufficientPayment = 12,
    /// Rental period has not elapsed yet
    RentalNotExpired = 13,
    /// Token transfer did not succeed
    TransferFailed = 14,
}
