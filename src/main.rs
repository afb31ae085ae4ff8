use planetsim::{Scenario, ScenarioConfig};
use planetsim::{builtin_scenario, Profile};
use planetsim::run_viewer;

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Built-in planet set to run
    #[arg(short, long, value_enum, default_value = "classic")]
    profile: Profile,

    /// Load a scenario YAML from the scenarios/ directory instead
    #[arg(short, long)]
    file: Option<String>,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    match &args.file {
        Some(file_name) => {
            let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
            let file = File::open(&config_path)?;
            let reader = BufReader::new(file);
            let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
            Ok(scenario_cfg)
        }
        None => Ok(builtin_scenario(args.profile)),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario_cfg = load_scenario(&args)?;
    let scenario = Scenario::build_scenario(scenario_cfg);

    run_viewer(scenario);

    Ok(())
}
