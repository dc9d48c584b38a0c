use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use orbatlas::cluster::{select_tier, LodTier, OverlayStore};
use orbatlas::config::Config;
use orbatlas::dataset::{load_feature_collection, DatasetOptions};
use orbatlas::feed::CatalogFeed;
use orbatlas::render::{build_satellite_records, ClusterMarker};
use orbatlas::viewport::{visible, CameraState, MonotonicTime, RecomputeThrottle};

#[derive(Parser)]
#[command(name = "orbatlas")]
#[command(about = "Orbital telemetry and geospatial overlay pipeline")]
struct Cli {
    /// Optional YAML config file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the element-feed fallback chain once and print a summary
    Fetch,
    /// Derive metrics and classification for a TLE file
    Metrics { file: PathBuf },
    /// Build the LOD pyramid for a GeoJSON dataset and print tier summaries
    Cluster {
        file: PathBuf,
        /// Property holding the categorical tag
        #[arg(long)]
        category_property: Option<String>,
        /// Property holding the tag weight
        #[arg(long)]
        weight_property: Option<String>,
        /// Camera altitude in km; selects a tier and culls to the viewport
        #[arg(long)]
        camera_altitude: Option<f64>,
        /// Camera look-at latitude, degrees
        #[arg(long, default_value_t = 0.0)]
        camera_lat: f64,
        /// Camera look-at longitude, degrees
        #[arg(long, default_value_t = 0.0)]
        camera_lng: f64,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error reading config: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    match cli.command {
        Commands::Fetch => fetch(&config).await,
        Commands::Metrics { file } => metrics(&file),
        Commands::Cluster {
            file,
            category_property,
            weight_property,
            camera_altitude,
            camera_lat,
            camera_lng,
        } => cluster(
            &config,
            &file,
            DatasetOptions {
                category_property,
                weight_property,
            },
            camera_altitude.map(|altitude_km| CameraState {
                lat_deg: camera_lat,
                lng_deg: camera_lng,
                altitude_km,
            }),
        ),
    }
}

async fn fetch(config: &Config) -> ExitCode {
    let feed = match CatalogFeed::from_config(&config.feed) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error building feed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match feed.refresh().await {
        Ok(records) => {
            println!("Refreshed {} element records", records.len());
            for record in records.iter().take(10) {
                println!(
                    "  {:>7}  {}  mm={:.4} e={:.5}",
                    record.catalog_id, record.object_name, record.mean_motion, record.eccentricity
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Refresh failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn metrics(file: &PathBuf) -> ExitCode {
    let content = match std::fs::read_to_string(file) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let records = orbatlas::elements::parse_catalog(&content);
    if records.is_empty() {
        eprintln!("No element records found in {}", file.display());
        return ExitCode::FAILURE;
    }

    let satellites = build_satellite_records(&records, chrono::Utc::now());
    for sat in &satellites {
        println!(
            "{:>7}  {:<24} {:<10} {:<4} period={:>7.1}min alt={:>8.1}km radiation={:<8} eclipse={:.2}",
            sat.catalog_id,
            sat.label,
            sat.category,
            sat.band,
            sat.metrics.period_minutes,
            sat.metrics.average_altitude_km,
            sat.metrics.radiation,
            sat.metrics.eclipse_fraction,
        );
    }
    println!(
        "{} records, {} with live position",
        satellites.len(),
        satellites.iter().filter(|s| s.position.is_some()).count()
    );
    ExitCode::SUCCESS
}

fn cluster(
    config: &Config,
    file: &PathBuf,
    options: DatasetOptions,
    camera: Option<CameraState>,
) -> ExitCode {
    let points = match load_feature_collection(file, &options) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error loading dataset: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let store = OverlayStore::new(points);
    let pyramid = store.pyramid();
    println!(
        "{} points -> {} coarse / {} medium / {} fine clusters",
        store.points().len(),
        pyramid.coarse.len(),
        pyramid.medium.len(),
        pyramid.fine.len()
    );

    if let Some(camera) = camera {
        // Same gate a live viewer would run per camera event; the first
        // event always passes the leading edge.
        let (window_ms, quiet_ms) = match (
            config.view.recompute_window_ms(),
            config.view.quiescence_ms(),
        ) {
            (Ok(w), Ok(q)) => (w, q),
            (Err(e), _) | (_, Err(e)) => {
                eprintln!("Error in view config: {}", e);
                return ExitCode::FAILURE;
            }
        };
        let mut throttle = RecomputeThrottle::new(window_ms, quiet_ms, MonotonicTime::default());
        if !throttle.on_event() {
            return ExitCode::SUCCESS;
        }

        let tier = select_tier(camera.altitude_km);
        let candidates = pyramid.tier(tier);
        let seen = visible(candidates, &camera);
        println!(
            "camera at {:.1} km -> {} tier, {} of {} clusters visible",
            camera.altitude_km,
            tier,
            seen.len(),
            candidates.len()
        );
        for cluster in seen.iter().take(10) {
            let marker = ClusterMarker::from(*cluster);
            println!(
                "  ({:>7.2}, {:>8.2})  members={:<5} tag={}",
                marker.lat,
                marker.lng,
                marker.member_count,
                marker.color_tag.as_deref().unwrap_or("-")
            );
        }
    } else {
        for tier in [LodTier::Coarse, LodTier::Medium, LodTier::Fine] {
            let total: usize = pyramid.tier(tier).iter().map(|c| c.member_count).sum();
            println!(
                "  {:<6} {} clusters, {} members",
                tier,
                pyramid.tier(tier).len(),
                total
            );
        }
    }

    ExitCode::SUCCESS
}
