pub mod client;
pub mod config;
pub mod error;
mod schema;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;
