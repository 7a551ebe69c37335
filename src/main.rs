use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use wav_encoder::Config;
use wav_encoder::Quantization;
use wav_encoder::decode::decode_file;
use wav_encoder::inspect::inspect_file;
use wav_encoder::tone::sine;
use wav_encoder::write_wav_file;

#[derive(Parser, Debug)]
#[command(name = "wav-encoder")]
#[command(about = "Write canonical 16-bit PCM WAV files")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode audio files and re-encode them as 16-bit PCM WAV
    Convert {
        /// Input audio files (WAV, MP3, ...)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Directory for the encoded files
        #[arg(short, long)]
        out_dir: PathBuf,

        /// Let out-of-range samples wrap instead of clamping (legacy output)
        #[arg(long)]
        legacy_wrap: bool,
    },

    /// Synthesize a sine tone
    Tone {
        /// Output WAV file
        #[arg(short, long)]
        output: PathBuf,

        /// Tone frequency (Hz)
        #[arg(long, default_value_t = 440.0)]
        frequency: f32,

        /// Peak amplitude (0.0-1.0)
        #[arg(long, default_value_t = 0.5)]
        amplitude: f32,

        /// Length (seconds)
        #[arg(long, default_value_t = 1.0)]
        duration: f32,

        /// Sample rate (Hz)
        #[arg(long, default_value_t = 44100)]
        sample_rate: u32,

        /// Channel count
        #[arg(long, default_value_t = 1)]
        channels: u16,
    },

    /// Print the header of a WAV file
    Inspect {
        /// WAV file
        input: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match args.command {
        Command::Convert {
            inputs,
            out_dir,
            legacy_wrap,
        } => convert(&inputs, &out_dir, &convert_config(legacy_wrap)),
        Command::Tone {
            output,
            frequency,
            amplitude,
            duration,
            sample_rate,
            channels,
        } => {
            let config = Config {
                frequency,
                amplitude,
                duration_sec: duration,
                sample_rate,
                channels,
                ..Config::default()
            };
            let buffer = sine(&config)?;
            write_wav_file(&output, &buffer, config.quantization)?;
            info!(
                "Wrote {:?} ({} frames at {} Hz)",
                output,
                buffer.frames(),
                buffer.sample_rate()
            );
            Ok(())
        }
        Command::Inspect { input } => {
            let info = inspect_file(&input)?;
            println!("{}", input.display());
            println!("  channels:        {}", info.channels);
            println!("  sample rate:     {} Hz", info.sample_rate);
            println!("  bits per sample: {}", info.bits_per_sample);
            println!("  frames:          {}", info.frames);
            println!("  duration:        {:.3} s", info.duration_secs());
            Ok(())
        }
    }
}

fn convert(
    inputs: &[PathBuf],
    out_dir: &Path,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")?
            .progress_chars("=>-"),
    );

    let mut failed = 0usize;
    for input in inputs {
        pb.set_message(input.display().to_string());
        let output = out_path(input, out_dir);
        let result = decode_file(input).and_then(|buffer| {
            write_wav_file(&output, &buffer, config.quantization)?;
            Ok(buffer)
        });
        match result {
            Ok(buffer) => pb.println(format!(
                "{} -> {} ({:.2} s, {} ch @ {} Hz)",
                input.display(),
                output.display(),
                buffer.duration_secs(),
                buffer.channels(),
                buffer.sample_rate()
            )),
            Err(e) => {
                failed += 1;
                error!("{}: {}", input.display(), e);
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");

    if failed > 0 {
        return Err(format!("{} of {} files failed", failed, inputs.len()).into());
    }
    Ok(())
}

fn convert_config(legacy_wrap: bool) -> Config {
    let quantization = if legacy_wrap {
        Quantization::Wrapping
    } else {
        Quantization::Clamped
    };
    Config {
        quantization,
        ..Config::default()
    }
}

fn out_path(input: &Path, out_dir: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or(input.as_os_str()).to_os_string();
    name.push(".wav");
    out_dir.join(name)
}
