pub mod app;
pub mod args;
pub mod driver;
pub mod input;
pub mod logger;
pub mod render;
pub mod source;

pub use app::run;
pub use args::{Cli, Command};
pub use source::RosterSource;
