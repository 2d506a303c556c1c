//! HTTP API: routing, request decoding, and response/status mapping for the calendar.

pub mod app;
pub mod middleware;
