// 🏠 Address - "HouseNumber StreetName StreetType"

use crate::error::{PeopleError, Result};
use std::fmt;

const TOKEN_DELIMITER: char = ' ';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub house_number: String,
    pub street_name: String,
    pub street_type: String,
}

impl Address {
    /// Parse an address by splitting on single spaces.
    ///
    /// Only the first three tokens are kept; anything after the street type is
    /// dropped, and the reports key off exactly those three tokens. Runs of
    /// spaces produce empty tokens, so the rendering may differ from `raw`.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut tokens = raw.split(TOKEN_DELIMITER);

        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(house_number), Some(street_name), Some(street_type)) => Ok(Address {
                house_number: house_number.to_string(),
                street_name: street_name.to_string(),
                street_type: street_type.to_string(),
            }),
            _ => Err(PeopleError::AddressFormat {
                address: raw.to_string(),
            }),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.house_number, self.street_name, self.street_type)
    }
}
