pub mod abstract_trait;
pub mod config;
pub mod domain;
pub mod handler;
pub mod service;
pub mod state;
