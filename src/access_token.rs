pub mod data;
pub mod decoder;
pub mod generator;


pub use decoder::AccessTokenDecoder;
pub use generator::AccessTokenGenerator;
