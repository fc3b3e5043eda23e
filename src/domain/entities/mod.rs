pub mod edit_buffer;
pub mod field;
pub mod password;
pub mod patch;
pub mod profile;
pub mod role;
