//! local-clipboard
//!
//! One binary, two modes: `server` keeps the authoritative value and its
//! history behind a small HTTP API, `client` polls the local clipboard and
//! converges it with the server.

pub mod bootstrap;
pub mod cli;
pub mod web;
