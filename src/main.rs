use tbsim::{decode_file, Scenario, ScenarioConfig};
use tbsim::{project, ConservationSample};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML describing the selection and parameters
    #[arg(short, default_value = "scenario.yaml")]
    file_name: String,

    /// Replay a precomputed trajectory file instead of integrating live
    #[arg(long)]
    trajectory: Option<PathBuf>,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

/// Integrate the configured orbit live, logging conservation drift.
fn run_live(cfg: &ScenarioConfig) {
    let mut scenario = Scenario::build_scenario(cfg);
    let dt = scenario.parameters.dt;
    let log_every = scenario.parameters.log_every.max(1);

    log::info!(
        "integrating {:?} with {:?}, dt = {dt}, {} steps",
        cfg.selection.orbit,
        scenario.integrator,
        scenario.parameters.steps
    );

    let initial = ConservationSample::capture(&scenario.system.bodies);
    let mut prev = initial;

    for step in 1..=scenario.parameters.steps {
        scenario.integrator.step(&mut scenario.system, dt);

        let sample = ConservationSample::capture(&scenario.system.bodies);
        let per_step = sample.delta(&prev);

        for (body, trail) in scenario.system.bodies.iter().zip(scenario.trails.iter_mut()) {
            trail.push(&body.x);
        }

        if step % log_every == 0 {
            let drift = sample.delta(&initial);
            let shape = project(
                &scenario.system.bodies[0].x,
                &scenario.system.bodies[1].x,
                &scenario.system.bodies[2].x,
            );
            log::info!(
                "step {step}: t = {:.3}, dE = {:+.3e} (step {:+.3e}), |dP| = {:.3e}, shape = ({:+.3}, {:+.3}, {:+.3})",
                scenario.system.t,
                drift.energy,
                per_step.energy,
                drift.momentum.norm(),
                shape.x,
                shape.y,
                shape.z
            );
        }

        prev = sample;
    }
}

/// Replay a decoded trajectory through the trail buffers, no live stepping.
fn run_playback(cfg: &ScenarioConfig, path: &PathBuf) -> Result<()> {
    use tbsim::TrailBuffer;

    // Stepping must not proceed until the decode completes; a decode failure
    // surfaces here and leaves nothing partially committed
    let frames = decode_file(path)?;
    log::info!("decoded {} frames from {}", frames.len(), path.display());

    let trail_length = cfg.parameters.trail_length;
    let mut trails: Vec<TrailBuffer> = frames
        .first()
        .map(|f| {
            f.bodies
                .iter()
                .map(|b| TrailBuffer::new(trail_length, b.color, b.size))
                .collect()
        })
        .unwrap_or_default();

    let log_every = cfg.parameters.log_every.max(1) as usize;
    for (i, frame) in frames.iter().enumerate() {
        for (body, trail) in frame.bodies.iter().zip(trails.iter_mut()) {
            trail.push(&body.x);
        }

        if (i + 1) % log_every == 0 {
            let shape = project(&frame.bodies[0].x, &frame.bodies[1].x, &frame.bodies[2].x);
            log::info!(
                "frame {}: dE = {:+.3e}, |dP| = {:.3e}, shape = ({:+.3}, {:+.3}, {:+.3})",
                i + 1,
                frame.d_energy,
                frame.d_momentum.norm(),
                shape.x,
                shape.y,
                shape.z
            );
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;

    match &args.trajectory {
        Some(path) => run_playback(&scenario_cfg, path)?,
        None => run_live(&scenario_cfg),
    }

    Ok(())
}
