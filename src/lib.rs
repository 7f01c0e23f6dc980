pub mod catalog;
pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod pager;
pub mod stats;
pub mod table;
pub mod ui;
