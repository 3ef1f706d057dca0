#![no_std]

#[cfg(test)]
extern crate std;

mod storage;


use soroban_sdk::{
    contract, contractimpl, symbol_short, token, Address, Env, String, Symbol, Vec,
};
use parkrent_lib::{
    validate_duration, validate_location, validate_price, Error, ParkingSpace, Rental,
    MAX_AVAILABLE_RESULTS, SECONDS_PER_HOUR,
};

use storage::*;

#[contract]
pub struct ParkingRental;

#[contractimpl]
impl ParkingRental {
    /// Initialize the contract with an admin and the payment token.
    pub fn initialize(env: Env, admin: Address, payment_token: Address) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        set_admin(&env, &admin);
        set_payment_token(&env, &payment_token);
        init_counters(&env);

        env.events().publish((symbol_short!("init"),), admin);
        Ok(())
    }

    /// Swap the payment token. Admin only; existing rentals keep the cost
    /// they were settled with.
    pub fn set_payment_token(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        admin.require_auth();
        let current_admin = get_admin(&env)?;
        if admin != current_admin {
            return Err(Error::Unauthorized);
        }

        set_payment_token(&env, &token);
        Ok(())
    }

    /// Register a new parking space and return its id.
    pub fn create_space(
        env: Env,
        owner: Address,
        location: String,
        price_per_hour: i128,
    ) -> Result<u64, Error> {
        owner.require_auth();
        require_initialized(&env)?;

        with_lock(&env, || {
            validate_location(&location)?;
            validate_price(price_per_hour)?;

            let space_id = next_space_id(&env);
            let space = ParkingSpace {
                id: space_id,
                location: location.clone(),
                price_per_hour,
                owner: owner.clone(),
                available: true,
                created_at: env.ledger().timestamp(),
            };
            set_space(&env, &space);
            set_space_owner(&env, space_id, &owner);

            env.events().publish(
                (Symbol::new(&env, "space_created"),),
                (space_id, location.clone(), price_per_hour, owner.clone()),
            );
            Ok(space_id)
        })
    }

    /// Change the hourly price of a space. Only the recorded owner may call
    /// this; rentals already opened keep their original cost.
    pub fn update_price(
        env: Env,
        owner: Address,
        space_id: u64,
        new_price: i128,
    ) -> Result<(), Error> {
        owner.require_auth();
        require_initialized(&env)?;

        with_lock(&env, || {
            let mut space = require_space(&env, space_id)?;
            if owner != space_owner(&env, space_id)? {
                return Err(Error::Unauthorized);
            }
            validate_price(new_price)?;

            space.price_per_hour = new_price;
            set_space(&env, &space);

            env.events().publish(
                (Symbol::new(&env, "price_updated"),),
                (space_id, new_price),
            );
            Ok(())
        })
    }

    /// Hand a space over to a new owner. The owner record and the space
    /// record are updated together so reads never disagree.
    pub fn transfer_space(
        env: Env,
        from: Address,
        to: Address,
        space_id: u64,
    ) -> Result<(), Error> {
        from.require_auth();
        require_initialized(&env)?;

        with_lock(&env, || {
            let mut space = require_space(&env, space_id)?;
            if from != space_owner(&env, space_id)? {
                return Err(Error::Unauthorized);
            }

            set_space_owner(&env, space_id, &to);
            space.owner = to.clone();
            set_space(&env, &space);

            env.events().publish(
                (Symbol::new(&env, "space_transferred"),),
                (space_id, from.clone(), to.clone()),
            );
            Ok(())
        })
    }

    /// Rent an available space for up to 24 hours.
    ///
    /// The renter pays `payment` into the contract, the owner receives the
    /// exact cost and any excess flows straight back to the renter. The space
    /// is marked rented before the token legs run, so a nested call cannot
    /// observe it as available.
    pub fn rent_space(
        env: Env,
        renter: Address,
        space_id: u64,
        duration_hours: u32,
        payment: i128,
    ) -> Result<u64, Error> {
        renter.require_auth();
        require_initialized(&env)?;

        with_lock(&env, || {
            let mut space = require_space(&env, space_id)?;
            if !space.available {
                return Err(Error::SpaceNotAvailable);
            }
            validate_duration(duration_hours)?;

            // Cannot overflow: price is capped at i128::MAX / 24.
            let total_cost = space.price_per_hour * duration_hours as i128;
            if payment < total_cost {
                return Err(Error::InsufficientPayment);
            }

            let start_time = env.ledger().timestamp();
            let end_time = start_time + duration_hours as u64 * SECONDS_PER_HOUR;

            let rental_id = next_rental_id(&env);
            let rental = Rental {
                id: rental_id,
                space_id,
                renter: renter.clone(),
                start_time,
                end_time,
                total_cost,
                active: true,
            };
            set_rental(&env, &rental);
            space_rentals_append(&env, space_id, rental_id);
            renter_rentals_append(&env, &renter, rental_id);

            space.available = false;
            set_space(&env, &space);

            let owner = space_owner(&env, space_id)?;
            let contract = env.current_contract_address();
            let client = token::Client::new(&env, &get_payment_token(&env)?);
            if client.try_transfer(&renter, &contract, &payment).is_err() {
                return Err(Error::TransferFailed);
            }
            if client.try_transfer(&contract, &owner, &total_cost).is_err() {
                return Err(Error::TransferFailed);
            }
            let refund = payment - total_cost;
            if refund > 0 && client.try_transfer(&contract, &renter, &refund).is_err() {
                return Err(Error::TransferFailed);
            }

            env.events().publish(
                (Symbol::new(&env, "space_rented"),),
                (rental_id, space_id, renter.clone(), start_time, end_time, total_cost),
            );
            Ok(rental_id)
        })
    }

    /// Close an expired rental and put the space back on the market.
    ///
    /// Either the renter or the current space owner may call this once the
    /// rental window has passed. Nothing happens automatically at expiry;
    /// until someone completes the rental the space stays off the market.
    pub fn complete_rental(env: Env, caller: Address, rental_id: u64) -> Result<(), Error> {
        caller.require_auth();
        require_initialized(&env)?;

        with_lock(&env, || {
            let mut rental = require_rental(&env, rental_id)?;
            if !rental.active {
                return Err(Error::RentalNotActive);
            }
            let owner = space_owner(&env, rental.space_id)?;
            if caller != rental.renter && caller != owner {
                return Err(Error::Unauthorized);
            }
            if env.ledger().timestamp() < rental.end_time {
                return Err(Error::RentalNotExpired);
            }

            rental.active = false;
            set_rental(&env, &rental);

            let mut space = require_space(&env, rental.space_id)?;
            space.available = true;
            set_space(&env, &space);

            env.events().publish(
                (Symbol::new(&env, "rental_completed"),),
                (rental_id, rental.space_id),
            );
            Ok(())
        })
    }

    /// Get a space record
    pub fn get_space(env: Env, space_id: u64) -> Option<ParkingSpace> {
        get_space(&env, space_id)
    }

    /// Get a rental record
    pub fn get_rental(env: Env, rental_id: u64) -> Option<Rental> {
        get_rental(&env, rental_id)
    }

    /// Current owner of a space
    pub fn owner_of(env: Env, space_id: u64) -> Result<Address, Error> {
        space_owner(&env, space_id)
    }

    /// All rental ids ever opened against a space, oldest first
    pub fn get_space_rentals(env: Env, space_id: u64) -> Vec<u64> {
        space_rentals(&env, space_id)
    }

    /// All rental ids ever opened by a renter, oldest first
    pub fn get_renter_rentals(env: Env, renter: Address) -> Vec<u64> {
        renter_rentals(&env, &renter)
    }

    /// Whether a rental is recorded active and its window still open. Reports
    /// false once the clock passes `end_time`, even before anyone calls
    /// `complete_rental`.
    pub fn is_rental_active(env: Env, rental_id: u64) -> bool {
        match get_rental(&env, rental_id) {
            Some(rental) => rental.active && env.ledger().timestamp() < rental.end_time,
            None => false,
        }
    }

    /// Ids of spaces currently open for rent, capped at 100 results.
    pub fn list_available_spaces(env: Env) -> Vec<u64> {
        let mut available = Vec::new(&env);
        for space_id in 1..=space_count(&env) {
            if let Some(space) = get_space(&env, space_id) {
                if space.available {
                    available.push_back(space_id);
                    if available.len() >= MAX_AVAILABLE_RESULTS {
                        break;
                    }
                }
            }
        }
        available
    }

    /// Number of spaces ever registered
    pub fn total_spaces(env: Env) -> u64 {
        space_count(&env)
    }

    /// Number of rentals ever opened
    pub fn total_rentals(env: Env) -> u64 {
        rental_count(&env)
    }
}
