//! Request and response bodies

pub mod vehicle;
