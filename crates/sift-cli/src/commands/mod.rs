pub mod analyze;
pub mod config;
pub mod dispatch;
pub mod history;
pub mod schema;
pub mod shared;
