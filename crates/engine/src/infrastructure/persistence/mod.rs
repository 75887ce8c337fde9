//! Postgres persistence for the element store.

mod connection;
mod element_repository;

pub use connection::connect_lazy;
pub use element_repository::PgElementRepo;
