use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::Parser;
use csv::ReaderBuilder;
use orrery::config::{SimulationSettings, load_catalog, load_settings};
use orrery::logging::init_logging;
use orrery::orbits::{Body, ElementsError, OrbitModel, OrbitalElements, PeriodUnit};
use plotters::prelude::*;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render a top-down PNG of catalog orbits and body positions"
)]
struct Cli {
    #[arg(long, default_value = "data/catalog/planets.yaml")]
    catalog: PathBuf,
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Simulation start date (RFC 3339)
    #[arg(long)]
    start: Option<DateTime<Utc>>,
    /// Simulated days after the start at which bodies are drawn
    #[arg(long, default_value_t = 0.0)]
    days: f64,
    /// Body-state CSV from `orrery` to overlay as trails
    #[arg(long)]
    states: Option<PathBuf>,
    #[arg(long, default_value = "artifacts/orbits.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 1000)]
    width: u32,
    #[arg(long, default_value_t = 1000)]
    height: u32,
    /// Draw body names (needs a system font)
    #[arg(long, default_value_t = false)]
    labels: bool,
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let catalog = load_catalog(&cli.catalog)?;
    let settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => SimulationSettings::default(),
    };
    let start = cli
        .start
        .or(settings.start_date)
        .unwrap_or_else(Utc::now);
    let unit = PeriodUnit::from(settings.period_unit);

    let bodies = catalog
        .bodies
        .iter()
        .map(|config| {
            let elements = OrbitalElements::try_from(config)?;
            let model = OrbitModel::select(&elements.shape(), settings.orbit_model);
            Ok(Body::anchored(
                elements,
                model,
                start,
                settings.reference_epoch,
                unit,
            ))
        })
        .collect::<Result<Vec<_>, ElementsError>>()?;

    let paths: Vec<Vec<[f64; 3]>> = bodies
        .iter()
        .map(|body| body.orbit_path(settings.orbit_path_segments))
        .collect();
    let extent = paths
        .iter()
        .flatten()
        .map(|p| p[0].abs().max(p[2].abs()))
        .fold(1.0_f64, f64::max)
        * 1.05;

    let trails = match &cli.states {
        Some(path) => read_trails(path)?,
        None => HashMap::new(),
    };

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&BLACK)?;

    let label_font = cli
        .labels
        .then(|| FontDesc::new(select_font_family(), 16.0, FontStyle::Normal));
    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if cli.labels {
        builder.caption(
            format!("Orbits at {}", start.format("%Y-%m-%d")),
            FontDesc::new(select_font_family(), 24.0, FontStyle::Bold).color(&WHITE),
        );
    }
    let mut chart = builder.build_cartesian_2d(-extent..extent, -extent..extent)?;

    chart.draw_series(std::iter::once(Circle::new(
        (0.0, 0.0),
        6,
        YELLOW.filled(),
    )))?;

    for (index, (body, path)) in bodies.iter().zip(&paths).enumerate() {
        let color = Palette99::pick(index);
        chart.draw_series(std::iter::once(PathElement::new(
            path.iter().map(|p| (p[0], p[2])).collect::<Vec<_>>(),
            ShapeStyle::from(&WHITE.mix(0.35)).stroke_width(1),
        )))?;

        if let Some(trail) = trails.get(body.name()) {
            chart.draw_series(
                trail
                    .iter()
                    .map(|&(x, z)| Circle::new((x, z), 1, color.mix(0.6).filled())),
            )?;
        }

        let position = body.state_at(cli.days).position;
        let point = (position[0], position[2]);
        chart.draw_series(std::iter::once(Circle::new(point, 4, color.filled())))?;
        if let Some(font) = &label_font {
            chart.draw_series(std::iter::once(Text::new(
                body.name().to_string(),
                point,
                font.clone().color(&WHITE),
            )))?;
        }
    }

    root.present()?;
    println!("Wrote {}", cli.output.display());
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

/// Top-down `(x, z)` samples per body from a body-state CSV.
fn read_trails(path: &Path) -> anyhow::Result<HashMap<String, Vec<(f64, f64)>>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| anyhow::anyhow!("Column '{name}' missing from {}", path.display()))
    };
    let body_idx = column("body")?;
    let x_idx = column("x")?;
    let z_idx = column("z")?;

    let mut trails: HashMap<String, Vec<(f64, f64)>> = HashMap::new();
    for record in rdr.records() {
        let record = record?;
        let (Some(body), Some(x), Some(z)) =
            (record.get(body_idx), record.get(x_idx), record.get(z_idx))
        else {
            continue;
        };
        let (Ok(x), Ok(z)) = (x.parse::<f64>(), z.parse::<f64>()) else {
            continue;
        };
        trails.entry(body.to_string()).or_default().push((x, z));
    }
    Ok(trails)
}
