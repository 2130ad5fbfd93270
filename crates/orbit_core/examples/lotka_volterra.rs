//! Two-species predator-prey run, printed as CSV for external plotting:
//!
//! ```sh
//! cargo run --example lotka_volterra > orbit.csv
//! ```

use anyhow::Result;
use orbit_core::{state::StateVector, systems::LotkaVolterra, trajectory::integrate};

fn main() -> Result<()> {
    env_logger::builder().format_timestamp_secs().init();

    let model = LotkaVolterra::new(2.0 / 3.0, 4.0 / 3.0, 1.0, 1.0);
    let initial = StateVector::new(vec![0.9, 0.9]);

    let trajectory = integrate(&model, initial, 0.0, 20.0, 0.1)?;
    log::info!(
        "integrated {} samples over [0, 20] with h = 0.1",
        trajectory.len()
    );

    println!("t,prey,predator");
    for sample in trajectory.iter() {
        println!("{},{},{}", sample.time, sample.state[0], sample.state[1]);
    }

    Ok(())
}
