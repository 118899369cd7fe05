pub mod books;
pub mod catalog;
pub mod core;
pub mod soap;
pub mod utils;
