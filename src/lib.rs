pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod hooks;
