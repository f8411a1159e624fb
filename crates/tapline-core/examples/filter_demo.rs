//! Filter demo: biquad cascades, FIR smoothing, PID control and fast trig.
//!
//! Run with: cargo run -p tapline-core --example filter_demo

use tapline_core::{
    BiquadCascade, BiquadCascadeDf2t, Fir, Frame, Pid, Processor, ProcessorExt,
    SectionCoefficients, fast_atan2, sin_cos,
};

const SAMPLE_RATE: f64 = 48000.0;

/// RBJ lowpass with feedback terms negated.
fn lowpass(freq: f64, q: f64) -> SectionCoefficients<f64> {
    let w0 = 2.0 * core::f64::consts::PI * freq / SAMPLE_RATE;
    let (sin_w0, cos_w0) = (libm::sin(w0), libm::cos(w0));
    let alpha = sin_w0 / (2.0 * q);
    let a0 = 1.0 + alpha;
    let b1 = (1.0 - cos_w0) / a0;
    SectionCoefficients::new(b1 / 2.0, b1, b1 / 2.0, 2.0 * cos_w0 / a0, -(1.0 - alpha) / a0)
}

fn gain_db<P: Processor<Sample = f64>>(filter: &mut P, freq: f64) -> f64 {
    filter.clear();
    let mut peak: f64 = 0.0;
    for n in 0..(SAMPLE_RATE as usize / 4) {
        let x = libm::sin(2.0 * core::f64::consts::PI * freq * n as f64 / SAMPLE_RATE);
        let y = filter.process(x);
        if n > SAMPLE_RATE as usize / 8 {
            peak = peak.max(y.abs());
        }
    }
    20.0 * libm::log10(peak)
}

fn main() {
    // --- 4th-order Butterworth lowpass at 1 kHz, both forms ---
    println!("=== Biquad Cascade (fc = 1 kHz) ===\n");

    let sections = [
        lowpass(1000.0, 0.541_196_100_146_197).to_array(),
        lowpass(1000.0, 1.306_562_964_876_376_5).to_array(),
    ];
    let mut df1 = BiquadCascade::<f64, f64, 2>::new(sections);
    let mut df2t = BiquadCascadeDf2t::<f64, f64, 2>::new(sections);

    println!("{:>8} {:>10} {:>10}", "Hz", "DF1 dB", "DF2T dB");
    println!("{:->8} {:->10} {:->10}", "", "", "");
    for freq in [100.0, 500.0, 1000.0, 2000.0, 4000.0] {
        println!(
            "{:>8.0} {:>10.2} {:>10.2}",
            freq,
            gain_db(&mut df1, freq),
            gain_db(&mut df2t, freq)
        );
    }

    // --- 3-axis FIR smoothing ---
    println!("\n=== Frame FIR (moving average of 4) ===\n");

    let mut smoother = Fir::<Frame<f32, 3>, f32, 4>::new([0.25; 4]);
    for reading in [[1.0, 0.0, -1.0], [1.2, 0.1, -0.9], [0.8, -0.1, -1.1], [1.0, 0.0, -1.0]] {
        let y = smoother.process(Frame::new(reading));
        println!("in {:?} -> out {:?}", reading, y.as_array());
    }

    // --- PID on a first-order plant ---
    println!("\n=== PID Loop (setpoint 1.0) ===\n");

    let mut pid = Pid::<f64, f64>::new(0.5, 0.1, 0.05);
    println!("weights: {:?}", pid.weights());
    let mut plant = 0.0;
    for step in 0..=60 {
        let u = pid.process(1.0 - plant);
        plant += 0.1 * (u - plant);
        if step % 10 == 0 {
            println!("step {:>3}: output {:>8.4} plant {:>8.4}", step, u, plant);
        }
    }

    // --- Chained pipeline ---
    println!("\n=== Chain: lowpass -> PID ===\n");

    let mut chain = BiquadCascadeDf2t::<f64, f64, 1>::new([lowpass(200.0, 0.707).to_array()])
        .chain(Pid::<f64, f64>::new(1.0, 0.0, 0.0));
    let y: Vec<f64> = (0..5).map(|_| chain.process(1.0)).collect();
    println!("step response: {:?}", y);

    // --- Fast trig ---
    println!("\n=== Fast Trig ===\n");

    println!("{:>8} {:>12} {:>12} {:>12}", "theta", "sin", "cos", "atan2");
    for theta in [0.0f32, 0.5, 1.0, 2.0, 3.0] {
        let (s, c) = sin_cos(theta);
        println!("{:>8.3} {:>12.6} {:>12.6} {:>12.6}", theta, s, c, fast_atan2(s, c));
    }
}
