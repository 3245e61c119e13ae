// Style resolution: colour schemes, font families, presets and CSS tokens.
// Everything here is pure; handlers only expose the tables and the resolver.

pub mod fonts;
pub mod handlers;
pub mod palette;
pub mod resolver;
pub mod tokens;

pub use resolver::SettingsResolver;
pub use tokens::{CssVar, StyleTokens};
