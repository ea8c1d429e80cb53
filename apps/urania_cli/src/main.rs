use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use urania::geocoding::Geocoder;
use urania::{generate_chart, BirthInfo, RulershipScheme, SnapshotEphemeris};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Rulership {
    /// Mars, Saturn and Jupiter rule Scorpio, Aquarius and Pisces.
    Traditional,
    /// Pluto, Uranus and Neptune rule Scorpio, Aquarius and Pisces.
    Modern,
}

impl From<Rulership> for RulershipScheme {
    fn from(value: Rulership) -> Self {
        match value {
            Rulership::Traditional => RulershipScheme::Traditional,
            Rulership::Modern => RulershipScheme::Modern,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Derive a Whole Sign natal chart from ephemeris positions")]
struct Args {
    /// Ephemeris positions JSON for the birth moment.
    #[arg(long)]
    positions: PathBuf,

    /// Birth date: YYYY-MM-DD, DD/MM/YYYY or DD-MM-YYYY.
    #[arg(long)]
    date: String,

    /// Local birth time, HH:MM (24-hour).
    #[arg(long)]
    time: String,

    #[arg(long, default_value = "Anonymous")]
    name: String,

    /// Birth place; looked up in the config's [[locations]] unless --lat/--lon are given.
    #[arg(long)]
    location: String,

    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    lat: Option<f64>,

    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    lon: Option<f64>,

    /// Hours east of UTC at the birth place and moment.
    #[arg(long, allow_hyphen_values = true)]
    utc_offset: Option<f64>,

    /// Chart config (default: configs/chart.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the rulership table from the config.
    #[arg(long, value_enum)]
    rulership: Option<Rulership>,

    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = urania_config::load_chart_config(args.config.as_deref())?;
    let mut settings = config.settings;
    if let Some(rulership) = args.rulership {
        settings.rulership = rulership.into();
    }

    let info = BirthInfo {
        name: args.name,
        date: args.date,
        time: args.time,
        location: args.location,
        latitude: args.lat,
        longitude: args.lon,
        utc_offset: args.utc_offset,
    };
    let geocoder: Option<&dyn Geocoder> = if config.gazetteer.is_empty() {
        None
    } else {
        Some(&config.gazetteer)
    };
    let ephemeris = SnapshotEphemeris::new(args.positions.clone());

    log::info!(
        "Deriving chart for {} from {}",
        info.name,
        ephemeris.path().display()
    );
    let chart = generate_chart(&info, geocoder, &ephemeris, settings)
        .with_context(|| format!("Failed to generate chart for {}", info.name))?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&chart)?
    } else {
        serde_json::to_string(&chart)?
    };
    println!("{json}");
    Ok(())
}
