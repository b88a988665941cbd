//! City dataset for the impact map
//!
//! The list lives in `cities.yaml` next to this file and is compiled into the
//! module, so the page does not fetch anything to show the map.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::models::{Poi, PoiId};
use crate::utils::format::{format_count, format_kilograms};

const CITIES_YAML: &str = include_str!("cities.yaml");

static DEFAULT_CITIES: Lazy<Vec<City>> = Lazy::new(|| match parse_cities(CITIES_YAML) {
    Ok(cities) => cities,
    Err(err) => {
        log::error!("{}", err);
        Vec::new()
    }
});

/// A city where the network has reported work
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: u32,
    pub city_name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub jobs_done: u64,
    pub trash_recycled_kg: u64,
}

impl City {
    /// POI for the tooltip engine, carrying the raw counters and their
    /// formatted labels as display fields
    pub fn to_poi(&self) -> Poi {
        Poi::new(PoiId::Number(i64::from(self.id)), self.longitude, self.latitude)
            .with_field("cityName", self.city_name.as_str())
            .with_field("jobsDone", self.jobs_done)
            .with_field("trashRecycledKg", self.trash_recycled_kg)
            .with_field("jobsDoneLabel", format_count(self.jobs_done))
            .with_field("trashRecycledLabel", format_kilograms(self.trash_recycled_kg))
    }
}

/// Parse a YAML city list
pub fn parse_cities(yaml: &str) -> Result<Vec<City>, DataError> {
    serde_yaml::from_str(yaml).map_err(|source| DataError::Malformed {
        name: "cities",
        source,
    })
}

/// The embedded city list, in display order
pub fn default_cities() -> &'static [City] {
    &DEFAULT_CITIES
}

/// The embedded city list as engine POIs
pub fn default_pois() -> Vec<Poi> {
    default_cities().iter().map(City::to_poi).collect()
}
