//! Output rendering for CLI commands

use crate::catalog::{ItemDetail, LoadResult};
use crate::cli::commands::OutputFormat;
use crate::error::Result;
use serde_json::json;

/// Render one loaded page
///
/// JSON output is one `item` line per item followed by a `page` line carrying
/// the cursor. Pretty output lists the items and says how to continue.
pub fn render_page(result: &LoadResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut lines = Vec::with_capacity(result.len() + 1);
            for item in &result.items {
                let profile = item.profile();
                lines.push(serde_json::to_string(&json!({
                    "type": "item",
                    "name": item.name,
                    "url": item.url,
                    "id": profile.id,
                    "sprite": item.sprite(),
                }))?);
            }
            lines.push(serde_json::to_string(&json!({
                "type": "page",
                "count": result.len(),
                "next_page": result.next_page,
            }))?);
            Ok(lines.join("\n"))
        }
        OutputFormat::Pretty => {
            if result.is_empty() {
                return Ok("Nothing found.".to_string());
            }

            let mut lines: Vec<String> = result
                .items
                .iter()
                .map(|item| {
                    let id = item.profile().id.map(|id| format!("#{id}")).unwrap_or_default();
                    format!("{:<6} {:<16} {}", id, item.name, item.sprite().unwrap_or("-"))
                })
                .collect();
            lines.push(match &result.next_page {
                Some(next) => format!(
                    "{} items, more with: pokedex more --page '{next}'",
                    result.len()
                ),
                None => format!("{} items, end of collection", result.len()),
            });
            Ok(lines.join("\n"))
        }
    }
}

/// Render a single item's profile
pub fn render_item(item: &ItemDetail, format: OutputFormat) -> Result<String> {
    let profile = item.profile();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&profile)?),
        OutputFormat::Pretty => {
            let mut lines = vec![match profile.id {
                Some(id) => format!("{} (#{id})", profile.name),
                None => profile.name.clone(),
            }];
            if let Some(height) = profile.height_m {
                lines.push(format!("Height: {height} m"));
            }
            if let Some(weight) = profile.weight_kg {
                lines.push(format!("Weight: {weight} kg"));
            }
            if !profile.types.is_empty() {
                lines.push(format!("Types: {}", profile.types.join(", ")));
            }
            if !profile.abilities.is_empty() {
                lines.push(format!("Abilities: {}", profile.abilities.join(", ")));
            }
            if !profile.stats.is_empty() {
                lines.push("Stats:".to_string());
                for stat in &profile.stats {
                    lines.push(format!("  {:<16} {}", stat.name, stat.value));
                }
                lines.push(format!("  {:<16} {}", "total", profile.base_stat_total()));
            }
            if let Some(artwork) = &profile.artwork {
                lines.push(format!("Artwork: {artwork}"));
            }
            if let Some(shiny) = &profile.artwork_shiny {
                lines.push(format!("Shiny: {shiny}"));
            }
            Ok(lines.join("\n"))
        }
    }
}

/// Render the featured item, preferring official artwork over the sprite
pub fn render_featured(item: Option<&ItemDetail>, format: OutputFormat) -> Result<String> {
    let image = item.and_then(|i| i.artwork().or_else(|| i.sprite()));
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&json!({
            "type": "featured",
            "name": item.map(|i| i.name.as_str()),
            "image": image,
        }))?),
        OutputFormat::Pretty => Ok(match (item, image) {
            (Some(item), Some(image)) => format!("{}: {image}", item.name),
            (Some(item), None) => format!("{}: no artwork", item.name),
            (None, _) => "Nothing found.".to_string(),
        }),
    }
}
