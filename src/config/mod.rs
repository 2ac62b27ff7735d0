//! Configuration loading for the invitation card.
//!
//! All user-tunable settings live here and are loaded from
//! `conf/config.toml` if present. Any missing or invalid entries fall back
//! to sensible defaults so the card can still launch. This includes the
//! invitation content itself (names, target instant, venue, typing lines,
//! photo and music paths) so a new couple only edits TOML.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{load_config, parse_config, serialize_config};
pub use models::{AppConfig, LogLevel, ThemeMode};
