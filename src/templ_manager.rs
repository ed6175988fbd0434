use std::sync::OnceLock;

use tera::Tera;
use tracing::info;

#[derive(Debug, Clone, Copy)]
pub struct TemplateManager {
    tera: &'static Tera,
}

impl TemplateManager {
    /// Parses everything under `templates/` once per process.
    pub fn init() -> Result<Self, tera::Error> {
        info!(
            "{:<20} - Initializing the Template manager",
            "templ manager"
        );
        static TERA: OnceLock<Tera> = OnceLock::new();

        let tera = match TERA.get() {
            Some(tera) => tera,
            None => {
                let parsed = Tera::new("templates/**/*")?;
                // A concurrent initializer may have won the race, both parsed the same files.
                TERA.get_or_init(|| parsed)
            }
        };

        Ok(Self { tera })
    }

    /// A helper function to render a template file from 'html/' directory to String
    pub fn render_html_to_string(
        &self,
        ctx: &tera::Context,
        template_file: &str,
    ) -> Result<String, tera::Error> {
        let template = format!("html/{template_file}");
        self.tera.render(&template, ctx)
    }

    pub fn tera(&self) -> &Tera {
        self.tera
    }
}
