pub mod date;

pub use date::{Date, DateParseError, DATE_FORMAT};
