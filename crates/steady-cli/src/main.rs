use anyhow::Result;
use clap::{Parser, Subcommand};
use steady_hal::{profiles, EisConfig, EisDevice, ScenarioMode};

#[derive(Parser)]
#[command(name = "steady", about = "Steady EIS device diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive a device through configure/run/query cycles
    Cycle {
        /// Image width handed to the EIS stage
        #[arg(long, default_value_t = 1920)]
        width: u32,
        /// Image height handed to the EIS stage
        #[arg(long, default_value_t = 1080)]
        height: u32,
        /// Capture scenario (preview, video-record, still-capture, zero-shutter-delay)
        #[arg(long, default_value = "video-record")]
        mode: ScenarioMode,
        /// Number of frame cycles to run
        #[arg(long, default_value_t = 4)]
        frames: u32,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the scenario capability table
    Probe,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Cycle {
            width,
            height,
            mode,
            frames,
            json,
        } => run_cycle(width, height, mode, frames, json)?,
        Commands::Probe => {
            for profile in profiles::list() {
                println!(
                    "{:<20} supported={:<5} crop_factor={}",
                    profile.mode, profile.supported, profile.crop_factor
                );
            }
        }
    }

    Ok(())
}

fn run_cycle(width: u32, height: u32, mode: ScenarioMode, frames: u32, json: bool) -> Result<()> {
    let mut device = EisDevice::for_scenario("steady-cli", mode)?;
    device.configure(mode, EisConfig::new(width, height))?;

    let mut reports = Vec::new();
    for frame in 0..frames {
        device.run()?;
        let cmv = device.compensation()?;
        let gmv = device.global_motion()?;

        if json {
            reports.push(serde_json::json!({
                "frame": frame,
                "cmv": cmv,
                "gmv": gmv,
            }));
        } else {
            println!(
                "frame {frame}: cmv x={:.3} y={:.3} target={}x{} gmv x={:.3} y={:.3}",
                cmv.x.as_pixels(),
                cmv.y.as_pixels(),
                cmv.target_width,
                cmv.target_height,
                gmv.x.as_pixels(),
                gmv.y.as_pixels(),
            );
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    device.release("steady-cli");
    Ok(())
}
