pub mod flash;
pub mod pagination_controls;
