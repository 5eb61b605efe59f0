pub mod handles;
pub mod link_page;
pub mod runner;
