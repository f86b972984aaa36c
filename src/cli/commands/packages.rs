use async_trait::async_trait;
use serde_json::json;

use super::CommandHandler;
use crate::booking::Package;
use crate::cli::app::OutputFormat;
use crate::config::SiteConfig;
use crate::Result;

/// Handler for the `packages` command
pub struct PackagesCommand {
    pub format: OutputFormat,
    pub config: SiteConfig,
}

#[async_trait]
impl CommandHandler for PackagesCommand {
    async fn execute(&self) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&self.to_json())?),
            OutputFormat::Text => print!("{}", self.render_text()),
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "packages"
    }
}

impl PackagesCommand {
    pub fn new(format: OutputFormat, config: SiteConfig) -> Self {
        Self { format, config }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let packages: Vec<_> = Package::ALL
            .iter()
            .map(|package| {
                json!({
                    "id": package.as_str(),
                    "name": package.display_name(),
                    "price_inr": package.price_inr(),
                    "duration_minutes": package.duration_minutes(),
                    "features": package.features(),
                })
            })
            .collect();

        json!({
            "business": self.config.business,
            "packages": packages,
            "locations": self.config.locations,
        })
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{} · {}\n\n",
            self.config.business.name, self.config.business.tagline
        ));

        out.push_str("Birthday packages\n");
        for package in Package::ALL {
            out.push_str(&format!(
                "  {:<8} {:<18} {:>9}  {} min  {}\n",
                package.as_str(),
                package.display_name(),
                package.price_label(),
                package.duration_minutes(),
                package.features().join(", ")
            ));
        }

        if !self.config.locations.is_empty() {
            out.push_str("\nLocations\n");
            for location in &self.config.locations {
                out.push_str(&format!("  {}: {}", location.name, location.address));
                if !location.hours.is_empty() {
                    out.push_str(&format!(" ({})", location.hours));
                }
                out.push('\n');
            }
        }
        out
    }
}
