//! # Database module — PostgreSQL persistence
//!
//! [`connect`] opens the connection pool and runs the embedded migrations from
//! `packages/api/migrations`. [`PgStore`] implements [`store::RecordStore`] on top
//! of that pool and is what the server binary hands to the API layer.
//!
//! ## Tables
//!
//! | Table | Sorted by |
//! |-------|-----------|
//! | `memories` | `created_at DESC` |
//! | `travels` | `date_visited DESC` |
//!
//! Age category and type are stored as their wire strings and guarded by `CHECK`
//! constraints; image URLs are a `TEXT[]` kept in insertion order.

mod pool;
mod postgres;

pub use pool::connect;
pub use postgres::PgStore;
