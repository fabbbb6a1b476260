mod args;
mod value_enum;

pub use args::{Args, LoggingOpts};
pub use value_enum::CliOutputFormat;
