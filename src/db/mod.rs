pub mod connection;
pub mod searches;

pub use connection::Database;
