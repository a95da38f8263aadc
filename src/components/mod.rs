pub mod button;
pub mod create_report;
pub mod data_table;
pub mod error_dialog;
pub mod modal;
pub mod navbar;
pub mod popover;
pub mod report;
pub mod status;

pub use data_table::DataTable;
pub use navbar::{Navbar, Page};
