use std::env;
use std::fs;

use foundation::math::GeoPoint;
use runtime::profile::DeviceProfile;
use scrub::config::ScrubConfig;
use scrub::session::{ScrubSession, TickPolicy};
use scrub::sink::RenderSink;
use trail::geojson;
use trail::poi::TrailPoi;
use trail::reveal::RevealSplit;

const SAMPLE_TRAIL: &str = include_str!("../assets/highland_mary_trail.json");
const SAMPLE_POIS: &str = include_str!("../assets/highland_mary_pois.json");

fn main() {
    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "run" => cmd_run(args),
        "inspect" => cmd_inspect(args),
        _ => Err(usage()),
    }
}

fn usage() -> String {
    [
        "trailscrub <command> [args]",
        "",
        "commands:",
        "  run [trail.json] [--pois FILE] [--config FILE] [--ticks N]",
        "      [--interval MS] [--profile desktop|mobile] [--reduced-motion]",
        "      Simulate a scroll pass over the trail and print each update.",
        "  inspect [trail.json] [--pois FILE]",
        "      Print trail length, bounds, and points of interest.",
        "",
        "With no trail path, the bundled Highland Mary Trail sample is used.",
    ]
    .join("\n")
}

struct ConsoleSink;

impl RenderSink for ConsoleSink {
    fn render_reveal(&mut self, split: RevealSplit) {
        println!(
            "reveal: {:8.1} m visible / {:8.1} m hidden",
            split.visible_m, split.hidden_m
        );
    }

    fn render_marker(&mut self, point: GeoPoint) {
        println!("marker: {:.6}, {:.6}", point.lon_deg, point.lat_deg);
    }
}

struct RunOptions {
    trail_path: Option<String>,
    pois_path: Option<String>,
    config_path: Option<String>,
    ticks: u32,
    interval_ms: Option<f64>,
    profile: DeviceProfile,
    reduced_motion: bool,
}

fn parse_run_options(args: Vec<String>) -> Result<RunOptions, String> {
    let mut opts = RunOptions {
        trail_path: None,
        pois_path: None,
        config_path: None,
        ticks: 20,
        interval_ms: None,
        profile: DeviceProfile::Desktop,
        reduced_motion: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--pois" => {
                opts.pois_path = Some(flag_value(&args, &mut i, "--pois")?);
            }
            "--config" => {
                opts.config_path = Some(flag_value(&args, &mut i, "--config")?);
            }
            "--ticks" => {
                let raw = flag_value(&args, &mut i, "--ticks")?;
                opts.ticks = raw
                    .parse()
                    .map_err(|_| format!("--ticks must be a positive integer, got {raw}"))?;
            }
            "--interval" => {
                let raw = flag_value(&args, &mut i, "--interval")?;
                opts.interval_ms = Some(
                    raw.parse()
                        .map_err(|_| format!("--interval must be a number, got {raw}"))?,
                );
            }
            "--profile" => {
                let raw = flag_value(&args, &mut i, "--profile")?;
                opts.profile = match raw.as_str() {
                    "desktop" => DeviceProfile::Desktop,
                    "mobile" => DeviceProfile::Mobile,
                    other => return Err(format!("unknown profile: {other}")),
                };
            }
            "--reduced-motion" => {
                opts.reduced_motion = true;
            }
            s if s.starts_with('-') => {
                return Err(format!("unknown arg: {s}\n\n{}", usage()));
            }
            _ => {
                if opts.trail_path.is_some() {
                    return Err("run takes at most one trail path".to_string());
                }
                opts.trail_path = Some(args[i].clone());
            }
        }
        i += 1;
    }

    if opts.ticks < 2 {
        return Err("--ticks must be at least 2".to_string());
    }
    Ok(opts)
}

fn flag_value(args: &[String], i: &mut usize, flag: &str) -> Result<String, String> {
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn load_payload(path: &Option<String>, fallback: &str) -> Result<String, String> {
    match path {
        Some(p) => fs::read_to_string(p).map_err(|e| format!("read {p}: {e}")),
        None => Ok(fallback.to_string()),
    }
}

fn load_trail_and_pois(
    trail_path: &Option<String>,
    pois_path: &Option<String>,
) -> Result<(Vec<GeoPoint>, Vec<TrailPoi>), String> {
    let trail_payload = load_payload(trail_path, SAMPLE_TRAIL)?;
    let points = geojson::trail_points_from_geojson_str(&trail_payload)
        .map_err(|e| format!("trail: {e}"))?;

    // POIs default to the bundled set only alongside the bundled trail.
    let pois = match (pois_path, trail_path) {
        (Some(p), _) => {
            let payload = fs::read_to_string(p).map_err(|e| format!("read {p}: {e}"))?;
            geojson::pois_from_geojson_str(&payload).map_err(|e| format!("pois: {e}"))?
        }
        (None, None) => {
            geojson::pois_from_geojson_str(SAMPLE_POIS).map_err(|e| format!("pois: {e}"))?
        }
        (None, Some(_)) => Vec::new(),
    };

    Ok((points, pois))
}

fn cmd_run(args: Vec<String>) -> Result<(), String> {
    let opts = parse_run_options(args)?;
    let (points, pois) = load_trail_and_pois(&opts.trail_path, &opts.pois_path)?;

    let mut config = match &opts.config_path {
        Some(p) => {
            let payload = fs::read_to_string(p).map_err(|e| format!("read {p}: {e}"))?;
            serde_json::from_str::<ScrubConfig>(&payload).map_err(|e| format!("config: {e}"))?
        }
        None => ScrubConfig::default(),
    };
    if let Some(interval) = opts.interval_ms {
        config.min_update_interval_ms = interval;
    }

    let policy = TickPolicy::from_preference(opts.reduced_motion, &config);
    let mut session = ScrubSession::with_policy(config, ConsoleSink, policy);
    session
        .load_trail(points, pois)
        .map_err(|e| format!("load trail: {e}"))?;

    let total = session.trail_length_m().unwrap_or(0.0);
    println!("trail loaded: {total:.1} m, {} pois", session.pois().len());
    println!();

    // One tick per simulated 16 ms frame, progress sweeping 0 -> 1.
    for i in 0..opts.ticks {
        let progress = i as f64 / (opts.ticks - 1) as f64;
        let now_ms = i as f64 * 16.0;
        session.on_progress(progress, now_ms);
    }

    let metrics = session.metrics();
    println!();
    println!(
        "progress: {:.2}, pois revealed: {}/{}",
        session.progress(),
        session.pois_revealed(),
        session.pois().len()
    );
    println!(
        "frames: {:.0} fps, {:.2} ms/frame, last update at {:.0} ms",
        metrics.fps, metrics.frame_time_ms, metrics.last_update_ms
    );
    println!("{}", session.status_line(opts.profile));

    for event in session.drain_events() {
        println!("event [{}] {}: {}", event.tick, event.kind, event.message);
    }

    Ok(())
}

fn cmd_inspect(args: Vec<String>) -> Result<(), String> {
    let mut trail_path: Option<String> = None;
    let mut pois_path: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--pois" => {
                pois_path = Some(flag_value(&args, &mut i, "--pois")?);
            }
            s if s.starts_with('-') => {
                return Err(format!("unknown arg: {s}\n\n{}", usage()));
            }
            _ => {
                if trail_path.is_some() {
                    return Err("inspect takes at most one trail path".to_string());
                }
                trail_path = Some(args[i].clone());
            }
        }
        i += 1;
    }

    let (points, pois) = load_trail_and_pois(&trail_path, &pois_path)?;
    let geometry = trail::geometry::TrailGeometry::from_points(points)
        .map_err(|e| format!("trail: {e}"))?;

    let bounds = geometry.bounds();
    println!("points: {}", geometry.points().len());
    println!("length: {:.1} m", geometry.total_length_m());
    println!(
        "bounds: [{:.6}, {:.6}] .. [{:.6}, {:.6}]",
        bounds.min_lon_deg, bounds.min_lat_deg, bounds.max_lon_deg, bounds.max_lat_deg
    );

    if !pois.is_empty() {
        println!("pois:");
        for poi in &pois {
            println!(
                "  {:8.1} m  {}",
                poi.distance_from_start_m,
                poi.name.as_deref().unwrap_or("(unnamed)")
            );
        }
    }

    Ok(())
}
