//! Design set demo: build a set, write it as TOML, load it back and run it.
//!
//! Run with: cargo run -p tapline-config --example design_demo

use tapline_config::{BiquadDesign, BiquadForm, ConfigError, DesignSet, FirDesign, PidDesign};
use tapline_core::{Processor, ProcessorExt};

fn main() -> Result<(), ConfigError> {
    // --- Build a set programmatically ---
    println!("=== Design Set ===\n");

    let set = DesignSet::new("imu-front-end")
        .with_description("Accelerometer conditioning and tilt control")
        .with_biquad(
            BiquadDesign::new("anti-alias")
                .with_form(BiquadForm::Df1)
                .with_section([0.2, 0.4, 0.2, 0.6, -0.2])
                .with_section([0.2, 0.4, 0.2, 0.6, -0.2]),
        )
        .with_fir(FirDesign::new("smoother", vec![0.25; 4]))
        .with_pid(PidDesign::new("tilt", 0.5, 0.1, 0.0));

    let text = set.to_toml()?;
    println!("{text}");

    // --- Save and reload ---
    let path = std::env::temp_dir().join("tapline_design_demo.toml");
    set.save(&path)?;
    let loaded = DesignSet::load(&path)?;
    println!("Loaded '{}' with {} designs from {}", loaded.name, loaded.len(), path.display());

    // --- Validation failures ---
    println!("\n=== Validation ===\n");

    let broken = "name = \"broken\"\n[[fir]]\nname = \"empty\"\ntaps = []\n";
    match DesignSet::from_toml(broken) {
        Ok(_) => println!("unexpectedly valid"),
        Err(e) => println!("rejected: {e}"),
    }

    match loaded.biquad("anti-alias")?.build_df1::<f32, 3>() {
        Ok(_) => println!("unexpectedly built"),
        Err(e) => println!("rejected: {e}"),
    }

    // --- Run the loaded designs ---
    println!("\n=== Pipeline ===\n");

    let filter = loaded.biquad("anti-alias")?.build_df1::<f64, 2>()?;
    let smoother = loaded.fir("smoother")?.build::<f64, 4>()?;
    let tilt = loaded.pid("tilt")?.build::<f64>()?;
    let mut pipeline = filter.chain(smoother).chain(tilt);

    for n in 0..10 {
        let reading = if n < 5 { 1.0 } else { 0.0 };
        let command = pipeline.process(reading);
        println!("reading {reading:.1} -> command {command:>8.4}");
    }

    let _ = std::fs::remove_file(&path);
    Ok(())
}
