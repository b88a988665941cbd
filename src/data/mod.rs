//! Static site data compiled into the module

pub mod cities;

pub use cities::{default_cities, default_pois, parse_cities, City};
