pub mod csv;
pub mod debounce;
pub mod download;
