//! Request middleware

pub mod model;
