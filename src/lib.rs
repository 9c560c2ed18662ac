pub mod config;
pub mod content;
pub mod controller;
pub mod db;
pub mod domain;
pub mod filters;
pub mod handlers;
pub mod input;
pub mod paths;
pub mod session;
pub mod state;
pub mod view;

#[cfg(test)]
pub mod testing;
