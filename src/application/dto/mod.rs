//! # Data Transfer Objects

pub mod flow_settings;
