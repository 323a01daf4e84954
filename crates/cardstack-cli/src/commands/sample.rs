use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use cardstack_core::{AppConfig, Size, StackPreset, StackTransformEngine, TransformResult};

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// First progress value
    #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
    pub from: f64,
    /// Last progress value (inclusive)
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    pub to: f64,
    /// Distance between samples
    #[arg(long, default_value_t = 0.5)]
    pub step: f64,
    /// Card width
    #[arg(long, default_value_t = 300.0)]
    pub width: f64,
    /// Card height
    #[arg(long, default_value_t = 400.0)]
    pub height: f64,
    /// Use a built-in preset instead of the configured options
    #[arg(short, long)]
    pub preset: Option<StackPreset>,
    /// Reverse the stack direction
    #[arg(long)]
    pub reverse: bool,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Sample {
    progress: f64,
    #[serde(flatten)]
    result: TransformResult,
}

/// Evenly spaced values from `from` to `to`, inclusive of `to` when it lands on a step
pub fn progress_values(from: f64, to: f64, step: f64) -> Result<Vec<f64>> {
    if step <= 0.0 || !step.is_finite() {
        bail!("--step must be a positive number, got {}", step);
    }
    if !from.is_finite() || !to.is_finite() || from > to {
        bail!("invalid range {}..{}", from, to);
    }

    let count = ((to - from) / step + 1e-9).floor() as usize + 1;
    Ok((0..count).map(|i| from + i as f64 * step).collect())
}

pub fn run(config: &AppConfig, args: &SampleArgs) -> Result<()> {
    let mut options = match args.preset {
        Some(preset) => preset.options(),
        None => config.stack_options(),
    };
    if args.reverse {
        options.reverse = true;
    }

    let engine = StackTransformEngine::new(config.capabilities());
    let size = Size::new(args.width, args.height);
    let values = progress_values(args.from, args.to, args.step)?;
    tracing::debug!("Sampling {} progress values", values.len());

    let samples: Vec<Sample> = values
        .into_iter()
        .map(|progress| Sample {
            progress,
            result: engine.compute(progress, &options, size),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&samples)?);
        return Ok(());
    }

    println!(
        "{:>8} {:>7} {:>9} {:>9} {:>8} {:>6} {:>4} {:>6}",
        "progress", "scale", "tx", "ty", "angle°", "alpha", "z", "blur"
    );
    for sample in &samples {
        let r = &sample.result;
        let blur = r
            .blur
            .map(|b| format!("{:.2}", b.radius))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>8.2} {:>7.3} {:>9.2} {:>9.2} {:>8.2} {:>6.3} {:>4} {:>6}",
            sample.progress,
            r.scale,
            r.translation.x,
            r.translation.y,
            r.angle.to_degrees(),
            r.alpha,
            r.z_order,
            blur
        );
    }

    Ok(())
}
