//! Concrete adapter implementations for ports.

pub mod csv_adapter;
pub mod file_config_adapter;
pub mod sample_market_adapter;
pub mod text_report;
pub mod writer_reply_adapter;
