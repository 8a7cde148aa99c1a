pub mod api;
pub mod interview;
