//! HTTP handlers: decode, validate, delegate to a service, encode.

pub mod common;
pub mod player;
pub mod user;
