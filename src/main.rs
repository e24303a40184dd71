extern crate log;
pub mod error;
pub mod geofile;
pub mod reduce;
use crate::reduce::reducer::PropertyReducer;
use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Reduce the size of a GeoJSON file by removing the feature properties that are not needed.
///
/// The file is overwritten in place, no backup is kept.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the GeoJSON file to reduce. Defaults to the bundled world map.
    #[arg(short, long)]
    filepath: Option<PathBuf>,
}

fn default_geojson_filepath() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("world.geo.json")
}

fn try_main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    env_logger::init();

    let args = Args::try_parse()?;
    let geojson_filepath = args.filepath.unwrap_or_else(default_geojson_filepath);

    let reducer = PropertyReducer::default();
    let report = reducer
        .reduce(&geojson_filepath)
        .with_context(|| format!("Reducing properties of {:?}", &geojson_filepath))?;
    if report.saved_bytes() <= 0 {
        log::warn!(
            "Reducing {:?} saved no bytes, its features may only have properties from {}",
            &geojson_filepath,
            reducer.allow_list()
        );
    }
    for line in report.summary_lines()? {
        println!("{}", line);
    }
    Ok(())
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rstest::rstest;
    use std::path::PathBuf;

    use super::{default_geojson_filepath, Args};

    #[rstest]
    fn test_args_default_to_bundled_geofile() {
        let args = Args::try_parse_from(["geojson_reducer"]).unwrap();
        assert_eq!(args.filepath, None);
        assert!(default_geojson_filepath().ends_with("assets/world.geo.json"));
    }

    #[rstest]
    #[case(&["geojson_reducer", "--filepath", "countries.geojson"])]
    #[case(&["geojson_reducer", "-f", "countries.geojson"])]
    fn test_args_filepath_override(#[case] argv: &[&str]) {
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.filepath, Some(PathBuf::from("countries.geojson")));
    }
}
