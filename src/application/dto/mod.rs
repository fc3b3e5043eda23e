pub mod profile;
pub mod route;
