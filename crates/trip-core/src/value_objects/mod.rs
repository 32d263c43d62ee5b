//! Value objects - immutable domain primitives

mod contact;
mod record_id;
mod travel;

pub use contact::{EmailAddress, PhoneNumber};
pub use record_id::{IdGenerator, RecordId, RecordIdParseError};
pub use travel::{Cluster, DepartureMonth, Spontaneity};
