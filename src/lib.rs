//! Typed schema of the puja booking database.
//!
//! [`schema`] holds the diesel table declarations, [`models`] the Row, Insert
//! and Update shape of every table, [`enums`] the enumerated column values and
//! [`catalog`] a runtime index over all of it. [`db`] creates the schema
//! through embedded migrations.

pub mod catalog;
pub mod db;
pub mod enums;
pub mod error;
pub mod models;
pub mod schema;
pub mod shapes;

#[cfg(test)]
mod tests;

pub use catalog::{EnumName, ForeignKey, TableName, FOREIGN_KEYS};
pub use enums::{BookingStatus, PaymentStatus, UserRole};
pub use error::ParseNameError;
pub use shapes::{InsertOf, RowOf, ServerDefaults, Shapes, UpdateOf};
