//! census-geocoder - Main entry point
//!
//! Thin CLI bootstrap around the library: reads the endpoint configuration
//! from the environment, takes the address fields as arguments, and prints
//! the resulting coordinate as JSON.

use anyhow::{bail, Result};
use census_geocoder::{Address, CensusClient, GeocodeError, Geocoder, GeocodingConfig};
use std::sync::Arc;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only so stdout stays machine-readable)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 4 && args.len() != 5 {
        bail!("usage: census-geocoder <street> <city> <state> <zip> [country]");
    }

    let country = args.get(4).map(String::as_str).unwrap_or("USA");
    let address = match Address::new(country, &args[0], &args[1], &args[2], &args[3]) {
        Ok(address) => address,
        Err(e) => {
            error!("Invalid address: {}", e);
            return Err(GeocodeError::from(e).into());
        }
    };

    let config = GeocodingConfig::from_env()?;
    debug!("Using geocoding endpoint: {}", config.base_url);

    let client = Arc::new(CensusClient::new(&config));
    let geocoder = Geocoder::new(config, client);

    let coordinate = geocoder.convert(&address)?;
    println!("{}", serde_json::to_string_pretty(&coordinate)?);

    Ok(())
}
