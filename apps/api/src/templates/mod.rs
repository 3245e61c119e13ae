// Built-in CV designs and the registry that resolves a template id to one.
// Templates are pure: data + settings in, HTML out.

pub mod classic;
pub mod executive;
pub mod handlers;
pub mod html;
pub mod minimal;
pub mod modern;
pub mod registry;
pub mod sidebar;

pub use registry::{TemplateContext, TemplateRegistry, DEFAULT_TEMPLATE_ID};
