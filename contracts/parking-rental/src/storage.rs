use soroban_sdk::{contracttype, Address, Env, Vec};

use parkrent_lib::{Error, ParkingSpace, Rental};

/// TTL constants (in ledgers). Ledgers close roughly every 5 seconds, so
/// records are bumped once they fall below ~30 days and each bump keeps
/// them live for ~60.
const RECORD_TTL_THRESHOLD: u32 = 518_400;
const RECORD_TTL_EXTEND: u32 = 1_036_800;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Contract administrator
    Admin,
    /// SEP-41 token used for rental payments
    PaymentToken,
    /// Monotonic counter for space ids
    SpaceCounter,
    /// Monotonic counter for rental ids
    RentalCounter,
    /// Re-entry flag held while a mutating operation runs
    Lock,
    /// Space record by id
    Space(u64),
    /// Authoritative owner record of a space
    SpaceOwner(u64),
    /// Rental record by id
    Rental(u64),
    /// Rental ids opened against a space, oldest first
    SpaceRentals(u64),
    /// Rental ids opened by a renter, oldest first
    RenterRentals(Address),
}

/* ---------------- ADMIN & CONFIG ---------------- */

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn require_initialized(env: &Env) -> Result<(), Error> {
    if !is_initialized(env) {
        return Err(Error::NotInitialized);
    }
    Ok(())
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

pub fn get_payment_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .ok_or(Error::NotInitialized)
}

/* ---------------- RE-ENTRY LOCK ---------------- */

/// Run `f` with the re-entry flag held. A nested invocation that lands in
/// another mutating entry point observes the flag and is rejected before it
/// touches any state.
pub fn with_lock<T>(env: &Env, f: impl FnOnce() -> Result<T, Error>) -> Result<T, Error> {
    acquire_lock(env)?;
    let result = f();
    release_lock(env);
    result
}

pub fn acquire_lock(env: &Env) -> Result<(), Error> {
    let locked: bool = env
        .storage()
        .instance()
        .get(&DataKey::Lock)
        .unwrap_or(false);
    if locked {
        return Err(Error::ReentrantCall);
    }
    env.storage().instance().set(&DataKey::Lock, &true);
    Ok(())
}

/// Clears the flag on the success path. On error the host discards every
/// write of the invocation, the flag included.
pub fn release_lock(env: &Env) {
    env.storage().instance().set(&DataKey::Lock, &false);
}

/* ---------------- COUNTERS ---------------- */

pub fn init_counters(env: &Env) {
    env.storage().instance().set(&DataKey::SpaceCounter, &0u64);
    env.storage().instance().set(&DataKey::RentalCounter, &0u64);
}

pub fn next_space_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::SpaceCounter)
        .unwrap_or(0)
        + 1;
    env.storage().instance().set(&DataKey::SpaceCounter, &id);
    id
}

pub fn space_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::SpaceCounter)
        .unwrap_or(0)
}

pub fn next_rental_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::RentalCounter)
        .unwrap_or(0)
        + 1;
    env.storage().instance().set(&DataKey::RentalCounter, &id);
    id
}

pub fn rental_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::RentalCounter)
        .unwrap_or(0)
}

/* ---------------- SPACES ---------------- */

pub fn set_space(env: &Env, space: &ParkingSpace) {
    let key = DataKey::Space(space.id);
    env.storage().persistent().set(&key, space);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
}

pub fn get_space(env: &Env, space_id: u64) -> Option<ParkingSpace> {
    env.storage().persistent().get(&DataKey::Space(space_id))
}

pub fn require_space(env: &Env, space_id: u64) -> Result<ParkingSpace, Error> {
    get_space(env, space_id).ok_or(Error::SpaceNotFound)
}

/* ---------------- OWNERSHIP ---------------- */

pub fn set_space_owner(env: &Env, space_id: u64, owner: &Address) {
    let key = DataKey::SpaceOwner(space_id);
    env.storage().persistent().set(&key, owner);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
}

/// The owner record is the source of truth for authorization checks; the
/// `owner` field on the space record mirrors it for reads.
pub fn space_owner(env: &Env, space_id: u64) -> Result<Address, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::SpaceOwner(space_id))
        .ok_or(Error::SpaceNotFound)
}

/* ---------------- RENTALS ---------------- */

pub fn set_rental(env: &Env, rental: &Rental) {
    let key = DataKey::Rental(rental.id);
    env.storage().persistent().set(&key, rental);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
}

pub fn get_rental(env: &Env, rental_id: u64) -> Option<Rental> {
    env.storage().persistent().get(&DataKey::Rental(rental_id))
}

pub fn require_rental(env: &Env, rental_id: u64) -> Result<Rental, Error> {
    get_rental(env, rental_id).ok_or(Error::RentalNotFound)
}

/* ---------------- RENTAL INDICES ---------------- */

pub fn space_rentals(env: &Env, space_id: u64) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::SpaceRentals(space_id))
        .unwrap_or(Vec::new(env))
}

pub fn space_rentals_append(env: &Env, space_id: u64, rental_id: u64) {
    let mut ids = space_rentals(env, space_id);
    ids.push_back(rental_id);
    let key = DataKey::SpaceRentals(space_id);
    env.storage().persistent().set(&key, &ids);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
}

pub fn renter_rentals(env: &Env, renter: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::RenterRentals(renter.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn renter_rentals_append(env: &Env, renter: &Address, rental_id: u64) {
    let mut ids = renter_rentals(env, renter);
    ids.push_back(rental_id);
    let key = DataKey::RenterRentals(renter.clone());
    env.storage().persistent().set(&key, &ids);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
}
