pub mod app_state;
pub mod config;
pub mod connectors;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;

#[cfg(test)]
pub mod test_utils;
