pub mod cache;
pub mod config;
pub mod db;
pub mod time;

pub use cache::InMemoryLatestValue;
pub use config::load_config;
pub use time::SystemClock;
