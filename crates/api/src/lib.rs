//! HTTP API: server wiring, routing, and the request pipeline.

pub mod app;
pub mod middleware;
