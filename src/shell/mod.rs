// Composition root.
//
// - `config` reads settings from the environment.
// - `state` wires the concrete store and hasher into `AppState`.
// - `http` builds the router and layers; `main.rs` serves it.

pub mod config;
pub mod http;
pub mod middleware;
pub mod observability;
pub mod state;
