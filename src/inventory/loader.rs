use crate::cities::{city_display_name, UNKNOWN_CITY};
use crate::domain::{Listing, ProjectStatus};
use crate::inventory::load_error::LoadError;
use crate::inventory::records::{AddressRow, ConfigurationRow, ProjectRow, VariantRow};
use crate::inventory::Inventory;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;

/// Read and join the four source tables into one flat inventory.
///
/// Addresses are optional (a project without one keeps an unknown
/// city/locality); configurations and variants must resolve, and variants
/// whose chain does not resolve are dropped. Output order is variant file
/// order, which is the order every query result preserves.
pub fn load_inventory(
    projects_path: impl AsRef<Path>,
    addresses_path: impl AsRef<Path>,
    configurations_path: impl AsRef<Path>,
    variants_path: impl AsRef<Path>,
) -> Result<Inventory, LoadError> {
    let projects: Vec<ProjectRow> = read_rows(projects_path.as_ref(), &["id", "name"])?;
    let addresses: Vec<AddressRow> = read_rows(addresses_path.as_ref(), &["projectId", "city"])?;
    let configurations: Vec<ConfigurationRow> =
        read_rows(configurations_path.as_ref(), &["id", "projectId", "bhk"])?;
    let variants: Vec<VariantRow> =
        read_rows(variants_path.as_ref(), &["configurationId", "price"])?;

    let projects_by_id: HashMap<&str, &ProjectRow> =
        projects.iter().map(|p| (p.id.as_str(), p)).collect();

    // One address per project; first row wins if the export has duplicates.
    let mut addresses_by_project: HashMap<&str, &AddressRow> = HashMap::new();
    for address in &addresses {
        addresses_by_project
            .entry(address.project_id.as_str())
            .or_insert(address);
    }

    let configurations_by_id: HashMap<&str, &ConfigurationRow> =
        configurations.iter().map(|c| (c.id.as_str(), c)).collect();

    let mut listings = Vec::with_capacity(variants.len());
    for variant in &variants {
        // Orphaned variants and configurations are dropped, not fatal.
        let Some(configuration) = configurations_by_id.get(variant.configuration_id.as_str())
        else {
            continue;
        };
        let Some(project) = projects_by_id.get(configuration.project_id.as_str()) else {
            continue;
        };
        let address = addresses_by_project.get(configuration.project_id.as_str());

        let bhk_label = configuration.bhk.trim().to_string();
        listings.push(Listing {
            name: project.name.clone(),
            slug: resolve_slug(project),
            status: ProjectStatus::from_raw(project.status.as_deref().unwrap_or("UNKNOWN")),
            city: address
                .map(|a| city_display_name(&a.city))
                .unwrap_or(UNKNOWN_CITY)
                .to_string(),
            locality: address
                .and_then(|a| a.locality.clone())
                .filter(|l| !l.trim().is_empty()),
            bhk: bhk_count(&bhk_label),
            bhk_label,
            price_inr: variant.price.filter(|p| *p >= 0),
        });
    }

    Ok(Inventory { listings })
}

fn read_rows<T: DeserializeOwned>(path: &Path, required: &[&'static str]) -> Result<Vec<T>, LoadError> {
    let file = path.display().to_string();

    let mut reader = csv::Reader::from_path(path).map_err(|e| LoadError::Read {
        file: file.clone(),
        message: e.to_string(),
    })?;

    let headers = reader
        .headers()
        .map_err(|e| LoadError::Malformed {
            file: file.clone(),
            message: e.to_string(),
        })?
        .clone();
    for &column in required {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn { file, column });
        }
    }

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row.map_err(|e| LoadError::Malformed {
            file: file.clone(),
            message: e.to_string(),
        })?);
    }
    Ok(rows)
}

/// Fall back to a slug derived from the name when the export has none.
/// Same name, same slug, every run.
fn resolve_slug(project: &ProjectRow) -> String {
    match project.slug.as_deref().map(str::trim) {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => project.name.to_lowercase().replace(' ', "-"),
    }
}

fn bhk_count(label: &str) -> Option<i64> {
    let digits: String = label.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
