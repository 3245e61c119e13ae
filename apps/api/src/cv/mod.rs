// CV documents: per-user personal info, sections, style settings and the
// selected template id, with validation at the API boundary.

pub mod handlers;
pub mod store;
pub mod validation;
