use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};
use clap::{Parser, ValueEnum};
use glam::DVec3;
use orrery::clock::ManualClock;
use orrery::config::{OrbitModelSetting, SimulationSettings, load_catalog, load_settings};
use orrery::export::paths::{OrbitPath, write_orbit_paths};
use orrery::export::states::{StateRecord, write_header};
use orrery::export::writer_for_path;
use orrery::logging::init_logging;
use orrery::picking::{PerspectiveCamera, Viewport};
use orrery::scene::{HeadlessRenderer, Simulation};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Run the orrery headless and export body states per frame"
)]
struct Cli {
    /// Body catalog (YAML or TOML)
    #[arg(long, default_value = "data/catalog/planets.yaml")]
    catalog: PathBuf,

    /// Simulation settings (TOML); defaults apply when omitted
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Simulation start date (RFC 3339), overrides the settings file
    #[arg(long)]
    start: Option<DateTime<Utc>>,

    /// Number of frames to run after the initial one
    #[arg(long, default_value_t = 10)]
    frames: u32,

    /// Wall-clock seconds between frames
    #[arg(long, default_value_t = 1.0)]
    frame_seconds: f64,

    /// Time-scale exponent (scale = 10^exponent), overrides the settings file
    #[arg(long)]
    time_exponent: Option<f64>,

    /// Orbit model override
    #[arg(long, value_enum)]
    orbit_model: Option<ModelArg>,

    /// CSV output path (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,

    /// Optional JSON file receiving the sampled orbit paths
    #[arg(long)]
    paths: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum ModelArg {
    AsCataloged,
    Circular,
    Elliptical,
}

impl From<ModelArg> for OrbitModelSetting {
    fn from(value: ModelArg) -> Self {
        match value {
            ModelArg::AsCataloged => OrbitModelSetting::AsCataloged,
            ModelArg::Circular => OrbitModelSetting::Circular,
            ModelArg::Elliptical => OrbitModelSetting::Elliptical,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    if !(cli.frame_seconds.is_finite() && cli.frame_seconds >= 0.0) {
        anyhow::bail!("--frame-seconds must be non-negative (got {})", cli.frame_seconds);
    }

    let catalog = load_catalog(&cli.catalog)?;
    let mut settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => SimulationSettings::default(),
    };
    if let Some(start) = cli.start {
        settings.start_date = Some(start);
    }
    if let Some(exponent) = cli.time_exponent {
        settings.time_scale.initial_exponent = exponent;
    }
    if let Some(model) = cli.orbit_model {
        settings.orbit_model = model.into();
    }

    let viewport = Viewport::new(1280.0, 720.0);
    let camera = PerspectiveCamera::looking_at(
        DVec3::new(0.0, 1500.0, 2500.0),
        DVec3::ZERO,
        viewport.aspect(),
    );
    let clock = ManualClock::new();
    let mut simulation = Simulation::new(
        HeadlessRenderer::new(),
        clock.clone(),
        &catalog,
        &settings,
        camera,
        viewport,
    )?;
    tracing::info!(label = %simulation.time_scale().label(), "starting run");

    let mut writer = writer_for_path(&cli.output)?;
    write_header(writer.as_mut())?;
    for frame in 0..=cli.frames {
        if frame > 0 {
            clock.advance(cli.frame_seconds);
        }
        let snapshot = simulation.tick();
        let date = snapshot.date.to_rfc3339_opts(SecondsFormat::Secs, true);
        for body in &snapshot.bodies {
            let name = simulation
                .body(body.id)
                .map(|b| b.name())
                .unwrap_or_default();
            StateRecord {
                body: name,
                elapsed_days: snapshot.elapsed_days,
                date_utc: &date,
                position: body.state.position,
                rotation_y: body.state.rotation_y,
            }
            .write_to(writer.as_mut())?;
        }
    }
    writer.flush()?;

    if let Some(path) = &cli.paths {
        let paths: Vec<OrbitPath<'_>> = simulation
            .body_ids()
            .filter_map(|id| {
                Some(OrbitPath {
                    name: simulation.body(id)?.name(),
                    points: simulation.orbit_path(id)?,
                })
            })
            .collect();
        let mut out = writer_for_path(path)?;
        write_orbit_paths(out.as_mut(), &paths)?;
        out.flush()?;
    }

    tracing::info!(
        elapsed_days = simulation.elapsed_days(),
        date = %simulation.current_date_label(),
        "run finished"
    );
    Ok(())
}
