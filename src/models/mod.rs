pub mod address;
pub mod follow;
pub mod profile;
