use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use wavfx::{
    config::{
        DEFAULT_DECAY_FACTOR, DEFAULT_DELAY_TIME, DEFAULT_GAIN, DEFAULT_REVERB_DELAY,
        DEFAULT_SLOWDOWN_FACTOR, DEFAULT_SPEEDUP_FACTOR,
    },
    distortion::DEFAULT_FOLD_AMOUNT,
    pcm, power, wav, EffectKind, EffectParams, PitchFilter, QuantizePolicy,
};

/// Apply an effect to a WAV file.
#[derive(Parser, Debug)]
#[command(name = "wavfx")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input WAV file path
    input_file: PathBuf,

    /// Effect to apply: delay, echo, reverb, chipmunk, slow-motion, distortion,
    /// reverse or pitch-shift
    effect: EffectKind,

    /// Output WAV file path
    #[arg(long, default_value = "output.wav")]
    output_file: PathBuf,

    /// Delay time in seconds (delay, echo)
    #[arg(long, default_value_t = DEFAULT_DELAY_TIME)]
    delay_time: f64,

    /// Decay factor in [0, 1] (echo, reverb)
    #[arg(long, default_value_t = DEFAULT_DECAY_FACTOR)]
    decay_factor: f64,

    /// Reverb pre-delay in samples
    #[arg(long, default_value_t = DEFAULT_REVERB_DELAY)]
    reverb_delay: usize,

    /// Playback speedup (chipmunk)
    #[arg(long, default_value_t = DEFAULT_SPEEDUP_FACTOR)]
    speedup_factor: f64,

    /// Playback slowdown (slow-motion)
    #[arg(long, default_value_t = DEFAULT_SLOWDOWN_FACTOR)]
    slowdown_factor: f64,

    /// Input gain (distortion)
    #[arg(long, default_value_t = DEFAULT_GAIN)]
    gain: f64,

    /// Clipping level as a fraction of full scale (distortion)
    #[arg(long, default_value_t = DEFAULT_FOLD_AMOUNT)]
    fold_amount: f64,

    /// helium, robot or default (pitch-shift)
    #[arg(long, default_value_t = PitchFilter::default())]
    filter: PitchFilter,

    /// Fail instead of clipping when the result leaves the 16-bit range
    #[arg(long)]
    strict: bool,
}

impl Args {
    fn params(&self) -> EffectParams {
        EffectParams {
            delay_time: self.delay_time,
            decay_factor: self.decay_factor,
            reverb_delay: self.reverb_delay,
            speedup_factor: self.speedup_factor,
            slowdown_factor: self.slowdown_factor,
            gain: self.gain,
            fold_amount: self.fold_amount,
            filter: self.filter,
        }
    }
}

fn main() -> Result<()> {
    // RUST_LOG=debug shows the derived effect quantities
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();

    let input = wav::load(&args.input_file)
        .with_context(|| format!("Failed to read {}", args.input_file.display()))?;
    log::info!(
        "Loaded {}: {} Hz, {} channel(s), {} samples ({:.2} s)",
        args.input_file.display(),
        input.sample_rate,
        input.channels,
        input.samples.len(),
        input.duration_secs()
    );

    let effect = args.params().effect(args.effect);
    let policy = if args.strict {
        QuantizePolicy::Strict
    } else {
        QuantizePolicy::Saturate
    };
    log::info!("Applying {:?}", effect);

    let rendered = effect
        .apply(&input, policy)
        .with_context(|| format!("Failed to apply {}", args.effect))?;
    if rendered.clipped > 0 {
        log::warn!(
            "{} of {} samples clipped to the 16-bit range",
            rendered.clipped,
            rendered.pcm.samples.len()
        );
    }
    log::debug!(
        "RMS {:.4} -> {:.4}",
        power(&pcm::to_float::<f32>(&input.samples)),
        power(&pcm::to_float::<f32>(&rendered.pcm.samples))
    );

    wav::save(&args.output_file, &rendered.pcm)
        .with_context(|| format!("Failed to write {}", args.output_file.display()))?;
    log::info!(
        "Wrote {}: {} Hz, {} samples ({:.2} s)",
        args.output_file.display(),
        rendered.pcm.sample_rate,
        rendered.pcm.samples.len(),
        rendered.pcm.duration_secs()
    );

    Ok(())
}
