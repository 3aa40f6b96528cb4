pub mod identifier;
pub mod product;
pub mod release;
pub mod response;
