use super::Address;

/// One data line of the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub address: Address,
    pub phone_number: String,
}
