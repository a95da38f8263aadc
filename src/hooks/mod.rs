pub mod data_state;
pub mod use_config_value;
pub mod use_report;
pub mod use_reports;
