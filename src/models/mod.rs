pub mod error;
pub mod report;
pub mod report_list;
pub mod statistics;
pub mod submission;
pub mod table;
pub mod wire;
