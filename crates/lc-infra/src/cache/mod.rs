mod latest_value;

pub use latest_value::InMemoryLatestValue;
