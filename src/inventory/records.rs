use serde::Deserialize;

// The four source exports and how they chain together:
//
//  project.csv                       id, name, slug, status
//  ProjectAddress.csv                projectId -> project, city id, locality
//  ProjectConfiguration.csv          projectId -> project, one BHK offering
//  ProjectConfigurationVariant.csv   configurationId -> configuration, price
//
// Column names follow the source export (camelCase ids). Extra columns in
// the files are ignored; required ones are checked before deserializing.

#[derive(Debug, Deserialize)]
pub struct ProjectRow {
    pub id: String,
    pub name: String,
    pub slug: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddressRow {
    #[serde(rename = "projectId")]
    pub project_id: String,
    // Opaque city id, resolved through the supported-cities table.
    pub city: String,
    pub locality: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConfigurationRow {
    pub id: String,
    #[serde(rename = "projectId")]
    pub project_id: String,
    // BHK label as sold, e.g. "2BHK".
    pub bhk: String,
}

#[derive(Debug, Deserialize)]
pub struct VariantRow {
    #[serde(rename = "configurationId")]
    pub configuration_id: String,
    // Smallest currency unit (INR). Empty = price not published yet.
    pub price: Option<i64>,
}
