//! Template rendering with Tera

use crate::error::ScrapeError;
use tera::{Context, Tera};

/// Template renderer with embedded templates
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Create a new template renderer
    pub fn new() -> Result<Self, ScrapeError> {
        let mut tera = Tera::default();

        tera.add_raw_template("base.html", include_str!("../templates/base.html"))?;
        tera.add_raw_template("index.html", include_str!("../templates/index.html"))?;

        Ok(Self { tera })
    }

    /// Render a template with a Tera context
    pub fn render(&self, template: &str, context: &Context) -> Result<String, ScrapeError> {
        Ok(self.tera.render(template, context)?)
    }
}
