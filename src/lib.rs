// Carebot - rule-based mental health support assistant
// Library exports

pub mod cli;
pub mod config;
pub mod context;
pub mod crisis;
pub mod errors;
pub mod knowledge;
pub mod responder;
pub mod retrieval;
pub mod session;
