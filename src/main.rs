//! Headless driver: spins the camera on a turntable and dumps the last
//! frame as JSON.
//!
//! Usage: `camview [OPTIONS.toml] [FRAMES]`

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use camview::controls::{ControlPanel, Turntable};
use camview::options::Options;
use camview::pipeline::{Frame, FrameBuilder};
use camview::CamviewError;
use clap::Parser;

const FRAME_TIME: f32 = 1.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "camview")]
#[command(about = "Spin the camera on a turntable and print the last frame")]
struct Args {
    /// Options TOML file; `-` or nothing uses the defaults
    options: Option<PathBuf>,

    /// Number of frames to build
    #[arg(default_value_t = 120)]
    frames: usize,
}

impl Args {
    fn options_path(&self) -> Option<&Path> {
        self.options.as_deref().filter(|path| *path != Path::new("-"))
    }
}

fn load_options(path: Option<&Path>) -> Result<Options, CamviewError> {
    let options = match path {
        Some(path) => {
            log::info!("Loading options from {}", path.display());
            Options::load(path)?
        }
        None => Options::default(),
    };
    options.validate()?;
    Ok(options)
}

fn run(options: Options, frames: usize) -> Option<Frame> {
    let mut controls = Turntable::new(options.camera.turntable_speed);
    let mut state = options.initial_state();
    let builder = FrameBuilder::new(options);

    let started = Instant::now();
    let mut last = None;
    for index in 0..frames {
        let changes = controls.update(&mut state, FRAME_TIME);
        let frame = builder.build(&state);
        log::debug!(
            "frame {index}: changes {:#08b}, azimuth {:.3}, visible {:.1}%",
            changes.bits(),
            state.azimuth,
            frame.visible_fraction * 100.0
        );
        last = Some(frame);
    }
    log::info!(
        "Built {frames} frames in {:.2} ms",
        started.elapsed().as_secs_f64() * 1000.0
    );
    last
}

fn write_frame(frame: &Frame) -> Result<(), String> {
    let json = serde_json::to_string_pretty(frame)
        .map_err(|e| format!("failed to serialize frame: {e}"))?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")
        .map_err(|e| format!("failed to write frame: {e}"))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let options = match load_options(args.options_path()) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let Some(frame) = run(options, args.frames) else {
        log::warn!("No frames requested");
        return;
    };

    if let Err(e) = write_frame(&frame) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_without_arguments() {
        let args = Args::try_parse_from(["camview"]).unwrap();
        assert_eq!(args.options_path(), None);
        assert_eq!(args.frames, 120);
    }

    #[test]
    fn dash_means_default_options() {
        let args = Args::try_parse_from(["camview", "-", "30"]).unwrap();
        assert_eq!(args.options_path(), None);
        assert_eq!(args.frames, 30);
    }

    #[test]
    fn path_and_frames_are_positional() {
        let args =
            Args::try_parse_from(["camview", "wide.toml", "7"]).unwrap();
        assert_eq!(args.options_path(), Some(Path::new("wide.toml")));
        assert_eq!(args.frames, 7);
    }

    #[test]
    fn help_is_not_an_options_file() {
        let err = Args::try_parse_from(["camview", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn bad_and_extra_arguments_are_rejected() {
        assert!(Args::try_parse_from(["camview", "-", "many"]).is_err());
        assert!(Args::try_parse_from(["camview", "-", "1", "2"]).is_err());
    }

    #[test]
    fn run_returns_the_last_frame() {
        assert!(run(Options::default(), 0).is_none());
        let frame = run(Options::default(), 3).unwrap();
        // default turntable speed over three 60 Hz frames
        assert!((frame.state.azimuth - 0.5 * 3.0 / 60.0).abs() < 1e-5);
    }
}
