//! Port traits (interfaces) between the domain and the outside world.

pub mod config_port;
pub mod market_data_port;
pub mod reply_port;
