//! Core of a meeting/scheduling dashboard.
//!
//! Features:
//! - 42-cell Sunday-aligned month grid builder
//! - day/event matching over category-tagged events
//! - booking form with a required-field submit gate
//! - dismissible banner board with a total variant/style mapping

pub mod app;
pub mod banner;
pub mod booking;
pub mod calendar;
pub mod config;
pub mod render;
