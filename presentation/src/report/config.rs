//! Resolved configuration report (`--show-config`)

use colored::Colorize;
use snake_domain::{ConfigField, Layer, Resolved};

/// Formats a resolved configuration together with its provenance
pub struct ConfigReport;

impl ConfigReport {
    pub fn format(resolved: &Resolved) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Resolved configuration:".cyan().bold()));
        for field in ConfigField::ALL {
            let layer = resolved.sources.layer_of(field);
            output.push_str(&format!(
                "  {:<14} {:<24} {}\n",
                field.key(),
                resolved.configuration.value_of(field),
                Self::layer_tag(layer)
            ));
        }

        output.push('\n');
        output.push_str(&format!(
            "{}\n",
            "Configuration sources (in priority order):".cyan().bold()
        ));
        output.push_str("  1. explicit     command-line flags\n");
        output.push_str("  2. environment  LOG_LEVEL, LOG_DIRECTORY, LOG_FILE, WIDTH, HEIGHT\n");
        match resolved.sources.file() {
            Some(path) => output.push_str(&format!(
                "  3. file         {} {}\n",
                "[FOUND]".green(),
                path.display()
            )),
            None => output.push_str("  3. file         [     ] none loaded\n"),
        }
        output.push_str("  4. default      built-in defaults\n");

        output
    }

    fn layer_tag(layer: Layer) -> String {
        let tag = format!("[{}]", layer.as_str());
        match layer {
            Layer::Explicit => tag.magenta().to_string(),
            Layer::Environment => tag.yellow().to_string(),
            Layer::File => tag.green().to_string(),
            Layer::Default => tag.dimmed().to_string(),
        }
    }
}
