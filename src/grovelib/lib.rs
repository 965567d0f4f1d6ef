mod decrypt;
mod error;
mod input;
mod mixer;
mod ring;

pub use decrypt::{decrypt, grove_coordinates, Scenario, DECRYPTION_KEY};
pub use error::DecryptError;
pub use input::parse_numbers;
pub use mixer::mix;
pub use ring::{Element, Ring, RingIter, Value};
