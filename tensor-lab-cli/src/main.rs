mod menu;

use std::io::{stdin, stdout};

use tensor_lab_core::LabRng;
use tensor_lab_demos::LabConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = LabConfig::default();
    let mut rng = LabRng::new(config.seed);
    log::info!("tensor-lab starting (seed: {:?})", rng.seed());

    let mut input = stdin().lock();
    let mut out = stdout();
    menu::run_loop(&mut input, &mut out, &mut rng, &config)?;

    log::info!("tensor-lab finished");
    Ok(())
}
