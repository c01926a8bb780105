pub mod database;
pub mod server;

pub use database::*;
pub use server::*;
