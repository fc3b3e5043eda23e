pub mod entities;
pub mod routes;
pub mod schema;
