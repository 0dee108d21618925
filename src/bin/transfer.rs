use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use orrery::config::{SimulationSettings, load_settings};
use orrery::core::vector;
use orrery::export::trajectory::{TrajectoryRecord, write_header};
use orrery::export::writer_for_path;
use orrery::logging::init_logging;
use orrery::transfer::{LaunchRequest, LegacySystem, TransferState, hohmann, phase_angle_deg};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Legacy two-body sandbox: arm a launch window and trace the ship"
)]
struct Cli {
    /// Destination planet index in the sandbox (0 = innermost)
    #[arg(long, default_value_t = 3)]
    destination: usize,

    /// Step at which the launch window is armed
    #[arg(long, default_value_t = 0)]
    arm_at: u64,

    /// Total integration steps
    #[arg(long, default_value_t = 2000)]
    steps: u64,

    /// Write every n-th step to the CSV
    #[arg(long, default_value_t = 10)]
    every: u64,

    /// Settings file providing the `[transfer]` section
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Trajectory CSV output path (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,

    /// Print the circular Hohmann estimate (Δv, TOF) to stderr
    #[arg(long, default_value_t = false)]
    estimate_hohmann: bool,

    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => SimulationSettings::default(),
    };
    let transfer = settings.transfer;
    let mut system = LegacySystem::classic(&transfer)?;
    let every = cli.every.max(1);

    if cli.estimate_hohmann {
        let destination = system
            .planets()
            .get(cli.destination)
            .ok_or_else(|| anyhow::anyhow!("No sandbox planet at index {}", cli.destination))?;
        let estimate = hohmann(
            system.planner().ship().radius(),
            destination.radius(),
            transfer.gm,
        )?;
        eprintln!(
            "Hohmann estimate: dv1={:.4} dv2={:.4} dv_total={:.4} tof={:.3}",
            estimate.dv1, estimate.dv2, estimate.dv_total, estimate.time_of_flight
        );
    }

    let mut writer = writer_for_path(&cli.output)?;
    write_header(writer.as_mut())?;
    write_sample(writer.as_mut(), &system)?;

    for _ in 0..cli.steps {
        if system.steps() == cli.arm_at {
            match system.set_launch_window(cli.destination)? {
                LaunchRequest::Armed(window) | LaunchRequest::Rearmed(window) => {
                    let ship = system.planner().ship().position;
                    let target = system.planets()[cli.destination].position;
                    let phase = phase_angle_deg(&ship, &target).unwrap_or_default();
                    tracing::info!(
                        phi_deg = window.phi_deg,
                        theta_deg = window.theta_deg,
                        current_phase_deg = phase,
                        "window armed"
                    );
                }
                LaunchRequest::IgnoredInFlight => {}
            }
        }
        system.step();
        if system.steps() % every == 0 {
            write_sample(writer.as_mut(), &system)?;
        }
    }
    writer.flush()?;

    let ship = system.planner().ship();
    tracing::info!(
        steps = system.steps(),
        radius = ship.radius(),
        speed = vector::norm(&ship.velocity),
        "run finished"
    );
    Ok(())
}

fn write_sample(writer: &mut dyn Write, system: &LegacySystem) -> std::io::Result<()> {
    let ship = system.planner().ship();
    TrajectoryRecord {
        step: system.steps(),
        time: system.elapsed(),
        position: ship.position,
        velocity: ship.velocity,
        radius: ship.radius(),
        state: state_label(system.planner().state()),
    }
    .write_to(writer)
}

fn state_label(state: TransferState) -> &'static str {
    match state {
        TransferState::Idle => "idle",
        TransferState::LaunchWindowArmed { .. } => "armed",
        TransferState::InFlight { .. } => "in_flight",
    }
}
