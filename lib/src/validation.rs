use soroban_sdk::String;

use crate::{errors::Error, MAX_PRICE_PER_HOUR, MAX_RENTAL_HOURS};

pub fn validate_location(location: &String) -> Result<(), Error> {
    if location.len() == 0 {
        return Err(Error::InvalidLocation);
    }
    Ok(())
}

pub fn validate_price(price: i128) -> Result<(), Error> {
    if price <= 0 || price > MAX_PRICE_PER_HOUR {
        return Err(Error::InvalidPrice);
    }
    Ok(())
}

pub fn validate_duration(hours: u32) -> Result<(), Error> {
    if hours == 0 || hours > MAX_RENTAL_HOURS {
        return Err(Error::InvalidDuration);
    }
    Ok(())
}
