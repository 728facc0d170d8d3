mod jwt;
pub mod password;

pub use jwt::{decode_data, encode_data};
