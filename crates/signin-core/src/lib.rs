//! Core signin library (form controller, notifications, config, logging).

pub mod config;
pub mod form;
pub mod logging;
pub mod notification;
