pub mod api_error;
pub mod config;
pub mod date_normalizer;
pub mod debounce;
pub mod in_flight;
pub mod pager;
