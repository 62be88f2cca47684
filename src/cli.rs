//! CLI domain: parse, route, output, and presentation only.
//! The engine does the work; this layer picks the prompter and sink.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::{map_error, StderrSink};
pub use parse::{Cli, Commands, ReportFormat, TargetArgs};
pub use presentation::{format_outcome_json, format_outcome_text};
pub use route::RunContext;
