//! Output rendering. Both formats walk the pool high-to-low; filters only add sections.

pub mod json;
pub mod text;

pub use json::write_json;
pub use text::write_text;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One address per line.
    #[default]
    Text,
    /// Single JSON document with the full list and every filtered section.
    Json,
}
