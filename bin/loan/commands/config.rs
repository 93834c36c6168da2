//! Config command - show where settings come from and their values

use std::path::Path;

use anyhow::{Context, Result};

use crate::style::*;
use loan_wizard::WizardConfig;

pub fn run(config: &WizardConfig, explicit_path: Option<&Path>) -> Result<()> {
    print_header("Configuration");

    let source = match explicit_path {
        Some(path) => path.display().to_string(),
        None => match WizardConfig::default_path() {
            Some(path) if path.is_file() => path.display().to_string(),
            Some(path) => format!("built-in defaults ({} not found)", path.display()),
            None => "built-in defaults".to_string(),
        },
    };
    print_key_value("Source", &source);
    print_key_value("API URL", &config.api_base_url);
    print_key_value("Timeout", &format!("{}s", config.request_timeout_secs));

    print_section("Endpoints");
    for path in ["/predict", "/contact", "/health"] {
        print_key_value(path, &config.endpoint(path));
    }

    print_section("TOML");
    let rendered = toml::to_string_pretty(config).context("Failed to render config")?;
    let lines: Vec<&str> = rendered.lines().collect();
    print_box("config.toml", &lines);
    println!();
    Ok(())
}
