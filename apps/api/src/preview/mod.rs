// Preview rendering: filters and orders sections, resolves style tokens,
// picks the template and wraps its output with the CSS custom properties.

pub mod handlers;
pub mod renderer;
