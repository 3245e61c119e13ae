//! Template registry: template id → rendering component.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::models::cv::{CvSection, PersonalInfo};
use crate::models::settings::TemplateSettings;

/// Id of the template used when the requested id is unknown or unset.
pub const DEFAULT_TEMPLATE_ID: &str = "modern";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("duplicate template definition: {id}")]
    Duplicate { id: String },
}

/// Everything a template may read. Sections are already filtered and ordered.
pub struct TemplateContext<'a> {
    pub personal_info: &'a PersonalInfo,
    pub sections: &'a [&'a CvSection],
    pub settings: &'a TemplateSettings,
}

/// A visual design. Implementations are stateless and must not fail:
/// missing optional data omits the corresponding element.
pub trait CvTemplate: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn render(&self, ctx: &TemplateContext<'_>) -> String;
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub is_default: bool,
}

pub struct TemplateRegistry {
    templates: HashMap<&'static str, Box<dyn CvTemplate>>,
    /// Registration order, for listing.
    order: Vec<&'static str>,
    default_id: &'static str,
}

impl TemplateRegistry {
    /// Creates a registry whose fallback is `default`.
    pub fn new(default: Box<dyn CvTemplate>) -> Self {
        let default_id = default.id();
        let mut templates: HashMap<&'static str, Box<dyn CvTemplate>> = HashMap::new();
        templates.insert(default_id, default);
        Self {
            templates,
            order: vec![default_id],
            default_id,
        }
    }

    /// Registry holding every built-in design, with `modern` as the fallback.
    pub fn builtin() -> Result<Self, TemplateError> {
        let mut registry = Self::new(Box::new(super::modern::ModernTemplate));
        registry.register(Box::new(super::classic::ClassicTemplate))?;
        registry.register(Box::new(super::minimal::MinimalTemplate))?;
        registry.register(Box::new(super::sidebar::SidebarTemplate))?;
        registry.register(Box::new(super::executive::ExecutiveTemplate))?;
        Ok(registry)
    }

    pub fn register(&mut self, template: Box<dyn CvTemplate>) -> Result<(), TemplateError> {
        let id = template.id();
        if self.templates.contains_key(id) {
            return Err(TemplateError::Duplicate { id: id.to_string() });
        }
        self.templates.insert(id, template);
        self.order.push(id);
        Ok(())
    }

    /// Returns the template for `id`, or the default when unknown or unset.
    pub fn resolve(&self, id: Option<&str>) -> &dyn CvTemplate {
        if let Some(template) = id.and_then(|id| self.templates.get(id.trim())) {
            return template.as_ref();
        }
        if let Some(requested) = id {
            tracing::debug!(
                "Unknown template id '{requested}', falling back to '{}'",
                self.default_id
            );
        }
        self.default_template()
    }

    pub fn default_template(&self) -> &dyn CvTemplate {
        // The default is inserted by `new` and never removed.
        self.templates[self.default_id].as_ref()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    pub fn list(&self) -> Vec<TemplateSummary> {
        self.order
            .iter()
            .map(|id| {
                let template = &self.templates[id];
                TemplateSummary {
                    id: template.id(),
                    name: template.name(),
                    description: template.description(),
                    is_default: *id == self.default_id,
                }
            })
            .collect()
    }
}
