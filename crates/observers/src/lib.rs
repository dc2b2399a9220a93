//! Reusable observers for bisection runs.
//!
//! This crate provides [`Observer`] implementations and the capability traits
//! they are written against.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for events ([`HasRecord`])
//!
//! [`LogObserver`] writes one `key=value` line per iteration to any
//! [`std::io::Write`] sink.
//!
//! [`Observer`]: bisect_core::Observer
//! [`HasRecord`]: traits::HasRecord

pub mod traits;

mod log;

pub use log::LogObserver;
