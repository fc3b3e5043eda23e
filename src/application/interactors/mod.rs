pub mod edit_session;
pub mod profile_page;
pub mod profile_store;
pub mod role;
pub mod route_guard;
