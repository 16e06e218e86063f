use handlebars::Handlebars;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

/// The page bootstrap: a handlebars registry loaded from the templates
/// directory. The root `page` template pulls fragments in as partials
/// (`{{> form}}`), which is the include mechanism of the original sheet app.
pub struct Pages {
    registry: Handlebars<'static>,
    dir: PathBuf,
}

impl Pages {
    /// Loads every `.hbs` file under `dir` as a template named after its
    /// file stem.
    pub fn load(dir: &Path) -> Result<Self, handlebars::TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_templates_directory(".hbs", dir)?;
        Ok(Pages {
            registry,
            dir: dir.to_path_buf(),
        })
    }

    /// Renders the root page with all includes resolved.
    pub fn render_page(&self, sheet_name: &str) -> Result<String, handlebars::RenderError> {
        self.registry.render("page", &json!({ "sheet": sheet_name }))
    }

    /// Raw text of a named fragment, for verbatim inlining by the client.
    /// Names are restricted to registered templates with plain identifiers,
    /// so a request cannot read outside the templates directory.
    pub fn include(&self, name: &str) -> Option<String> {
        let plain = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !plain || self.registry.get_template(name).is_none() {
            return None;
        }
        fs::read_to_string(self.dir.join(format!("{}.hbs", name))).ok()
    }
}
