use serde::Deserialize;

/// One person injured or killed in a recorded accident.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CasualtyRecord {
    pub accident_index: String,
    #[serde(default)]
    pub accident_year: Option<i32>,
    #[serde(default)]
    pub age_of_casualty: Option<i32>,
    #[serde(default)]
    pub lsoa_of_casualty: Option<String>,
}

/// One vehicle involved in a recorded accident.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VehicleRecord {
    pub accident_index: String,
    #[serde(default)]
    pub accident_year: Option<i32>,
    #[serde(default)]
    pub age_of_driver: Option<i32>,
    #[serde(default)]
    pub generic_make_model: Option<String>,
}
