//! event-scan: 写真 → OCR → イベント情報抽出

pub mod agent;
pub mod ai_provider;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod image_source;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod server;
pub mod vision;
