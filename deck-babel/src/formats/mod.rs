//! Output format implementations

pub mod html;
pub mod json;
