mod database;
mod env;

pub use self::database::{ConnectionManager, ConnectionPool, DatabaseConfig};
pub use self::env::{env_flag, parse_port};
