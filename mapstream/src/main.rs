use std::{env, fs::File};

use anyhow::{Result, bail};
use log::{info, warn};
use mapstream_rs::{
    AppState, Config, load_config,
    manifest::{all_map_urls, bumper_map_url, main_map_url, manifest_valid, resolve_segment_url},
    schemas::DmcVideoBundle,
};

/// The argument is either a manifest URL directly, or a path to a
/// metadata document carrying the playback URL
fn manifest_target(argument: &str) -> Result<String> {
    if !argument.ends_with(".json") {
        return Ok(argument.to_owned());
    }

    let file = File::open(argument)?;
    let bundle: DmcVideoBundle = serde_json::from_reader(file)?;
    match bundle.playback_url() {
        Some(href) => Ok(href.to_owned()),
        None => bail!("Metadata document carries no playback URL"),
    }
}

async fn app_entry() -> Result<()> {
    let config = match env::var("MAPSTREAM_CONFIG_PATH") {
        Ok(path) => load_config(path)?,
        Err(_) => Config::default(),
    };
    let app_state = AppState::new(config)?;

    let argument = match env::args().nth(1) {
        Some(argument) => argument,
        None => bail!("Usage: mapstream-rs <manifest url | metadata json>"),
    };

    let manifest_url = manifest_target(&argument)?;
    info!("Fetching manifest: {}", manifest_url);

    let playlist = app_state.fetcher.download_manifest(&manifest_url).await;
    if !manifest_valid(&playlist) {
        warn!("Manifest invalid or unavailable: {}", manifest_url);
        println!("Manifest is not valid");
        return Ok(());
    }

    println!("Manifest is valid");

    match all_map_urls(&playlist) {
        Some(map_list) if !map_list.is_empty() => {
            println!("Map URLs:");
            for map_url in map_list.iter() {
                println!("  {}", resolve_segment_url(&manifest_url, map_url));
            }
        }
        _ => println!("No map URLs present"),
    }

    let main_map = main_map_url(&playlist);
    if !main_map.is_empty() {
        println!(
            "Main content map: {}",
            resolve_segment_url(&manifest_url, &main_map)
        );
    }

    let bumper_map = bumper_map_url(&playlist);
    if !bumper_map.is_empty() {
        println!(
            "Intro bumper map: {}",
            resolve_segment_url(&manifest_url, &bumper_map)
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(e) = app_entry().await {
        panic!("Fatal error: {}", e);
    }
}
