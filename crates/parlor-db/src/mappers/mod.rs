//! Entity ↔ model mappers
//!
//! `From` impls converting database rows into domain entities. Sensitive
//! columns (password hashes) never leave this layer inside an entity.

mod member;
mod message;
mod room;
mod user;
