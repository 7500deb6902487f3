pub mod auth;
pub mod error;
pub mod projects;
pub mod server;

#[cfg(test)]
mod test_util;
