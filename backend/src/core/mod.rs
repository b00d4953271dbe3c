//! Clock readings and countdown formatting

pub mod time;
