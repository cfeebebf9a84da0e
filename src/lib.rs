// PhysicsGPT relay
// Library exports

pub mod config;
pub mod exam;
pub mod generator;
pub mod prompt;
pub mod provider;
pub mod request;
pub mod server;
