#![forbid(unsafe_code)]

pub mod dataset;
pub mod model;
