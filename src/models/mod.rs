// Value types shared by the record store and the reports

pub mod address;
pub mod name_frequency;
pub mod person;

pub use address::Address;
pub use name_frequency::NameFrequency;
pub use person::Person;
