pub mod primary_key;
pub mod response;
