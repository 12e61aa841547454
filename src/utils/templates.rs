use tera::Tera;
use crate::utils::app_error::AppError;

pub fn default_templates_dir() -> String {
    concat!(env!("CARGO_MANIFEST_DIR"), "/templates").to_string()
}

pub fn load_templates(dir: &str) -> Result<Tera, AppError> {
    let glob = format!("{}/**/*.html", dir.trim_end_matches('/'));
    let templates = Tera::new(&glob)?;
    if templates.get_template_names().next().is_none() {
        return Err(AppError::Config(format!("No templates found under {}", dir)));
    }
    Ok(templates)
}
