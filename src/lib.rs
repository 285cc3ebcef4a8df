pub mod access_token;
pub mod avatar;
pub mod bin_constants;
pub mod config;
pub mod data;
pub mod graphql;
pub mod hasher;
pub mod logging;
pub mod server;
pub mod store;
pub mod util;
