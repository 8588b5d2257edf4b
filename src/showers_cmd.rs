use anyhow::Result;

use crate::cli::ShowersArgs;
use crate::config::MeteoreoConfig;
use crate::setup;

/// Run the `showers` subcommand.
pub fn run(args: ShowersArgs) -> Result<()> {
    let config = MeteoreoConfig::load_or_default(&args.config)?;
    let catalog = setup::load_catalog(args.catalog.as_deref(), &config)?;

    println!(
        "{:<5} {:<26} {:>8} {:>8} {:>5} {:>8} {:>10}",
        "code", "name", "RA", "Dec", "r", "max ZHR", "peak s.l."
    );
    for record in catalog.iter() {
        println!(
            "{:<5} {:<26} {:>8.1} {:>8.1} {:>5.1} {:>8.0} {:>10.2}",
            record.code(),
            record.name(),
            record.radiant_ra_deg(),
            record.radiant_dec_deg(),
            record.population_index(),
            record.max_zhr(),
            record.peak_solar_lon_deg(),
        );
    }
    Ok(())
}
