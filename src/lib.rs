// Library for tests to access modules

pub mod animation;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod feed;
pub mod models;
pub mod notifications;
pub mod presenter;
pub mod routes;
pub mod scheduler;
pub mod timeframe;
pub mod version;
