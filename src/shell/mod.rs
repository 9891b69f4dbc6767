// Composition root for the activities service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers.
// - Expose the HTTP router and the caller extractor it relies on.

pub mod auth;
pub mod config;
pub mod http;
pub mod state;
