pub mod bootstrap;
pub mod health;
pub mod primary_key;
pub mod query;
