use tpsim::{Scenario, ScenarioConfig, StopReason};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "comet.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let scenario_cfg = load_scenario_from_yaml()?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    match tpsim::run(&mut scenario) {
        StopReason::TimeReached => {
            let p = &scenario.swarm.particles[0];
            println!(
                "# done at t = {:.6}: x = ({:.9}, {:.9}, {:.9})",
                scenario.swarm.t, p.x.x, p.x.y, p.x.z
            );
        }
        StopReason::Engulfed { t } => {
            println!("# engulfed at t = {:.6}", t);
        }
    }

    Ok(())
}
