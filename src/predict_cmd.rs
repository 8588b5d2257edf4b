use anyhow::Result;
use tracing::info;

use meteoreo_ephemeris::MeeusEphemeris;
use meteoreo_visibility::VisibilityEngine;

use crate::cli::PredictArgs;
use crate::config::MeteoreoConfig;
use crate::setup;

/// Run the `predict` subcommand.
pub fn run(args: PredictArgs) -> Result<()> {
    let config = MeteoreoConfig::load_or_default(&args.site.config)?;
    let catalog = setup::load_catalog(args.site.catalog.as_deref(), &config)?;
    let sky = setup::sky_source(&args.site, &config)?;
    let observer = setup::observer(&args.site, &config)?;
    info!(
        latitude = observer.latitude_deg(),
        longitude = observer.longitude_deg(),
        instant = %observer.instant(),
        "predicting visible meteors"
    );

    let mut engine = VisibilityEngine::new(&catalog, MeeusEphemeris::new(), sky);
    let result = engine.predict_with_info(&observer)?;

    let meteors = result.hourly_rate().round() as i64;
    println!("There will be an average of {meteors} meteor(s) visible per hour.");
    println!("{}", result.active_shower_sentence());
    println!("{}", result.moon_description());
    println!("The sky is Bortle {}.", result.bortle());
    Ok(())
}
