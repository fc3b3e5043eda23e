pub mod gateway;
pub mod schema;
