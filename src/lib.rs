pub mod config;
pub mod error;
pub mod handlers;
pub mod languages;
pub mod routes;
pub mod state;
pub mod translate;
pub mod websocket;
