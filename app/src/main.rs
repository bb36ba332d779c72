use clap::Parser;
use dots_core::{Config, FrameLoop, Scene};

mod window;

use window::Window;

#[derive(Parser)]
#[command(name = "dots")]
#[command(
    about = "Scatter-plots a sine-derived and a tangent-derived signal whose frequency and sample rate are controlled by two sliders"
)]
struct Args {
    #[arg(long, default_value_t = 1920)]
    width: u32,
    #[arg(long, default_value_t = 1080)]
    height: u32,
    #[arg(
        long,
        default_value_t = 60,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    fps: u32,
    #[arg(long, default_value = "Dots")]
    title: String,
    #[arg(long, default_value_t = 0.01, value_parser = parse_finite)]
    initial_freq: f32,
    #[arg(
        long,
        default_value_t = 10000,
        value_parser = clap::value_parser!(u32).range(0..=MAX_SAMPLE_RATE)
    )]
    initial_sample_rate: u32,
}

// Upper end of the sample rate slider.
const MAX_SAMPLE_RATE: i64 = 10000;

fn parse_finite(s: &str) -> Result<f32, String> {
    let value = s.parse::<f32>().map_err(|e| e.to_string())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{value} is not a finite number"))
    }
}

impl Args {
    fn into_config(self) -> Config {
        Config {
            title: self.title,
            width_px: self.width,
            height_px: self.height,
            target_fps: self.fps,
            initial_freq: self.initial_freq,
            initial_sample_rate: self.initial_sample_rate,
            ..Config::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Args::parse().into_config();
    log::info!(
        "opening {}x{} window at {} fps",
        config.width_px,
        config.height_px,
        config.target_fps
    );
    let scene = Scene::new(&config)?;
    let window = Window::new(&config)?;
    let mut frame_loop = FrameLoop::new(window, scene);
    frame_loop.run()
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_match_config() {
        let config = Args::parse_from(["dots"]).into_config();
        let default = Config::default();
        assert_eq!(config.title, default.title);
        assert_eq!(config.width_px, default.width_px);
        assert_eq!(config.height_px, default.height_px);
        assert_eq!(config.target_fps, default.target_fps);
        assert_eq!(config.initial_freq, default.initial_freq);
        assert_eq!(config.initial_sample_rate, default.initial_sample_rate);
    }

    #[test]
    fn overrides() {
        let config = Args::parse_from([
            "dots",
            "--width",
            "640",
            "--height",
            "480",
            "--initial-sample-rate",
            "4410",
            "--initial-freq",
            "2.5",
        ])
        .into_config();
        assert_eq!(config.width_px, 640);
        assert_eq!(config.height_px, 480);
        assert_eq!(config.initial_sample_rate, 4410);
        assert_eq!(config.initial_freq, 2.5);
    }

    #[test]
    fn sample_rate_limit_matches_slider() {
        assert_eq!(
            MAX_SAMPLE_RATE as f32,
            Config::default().sample_rate_slider.max_value
        );
    }

    #[test]
    fn rejects_sample_rate_above_slider_range() {
        assert!(
            Args::try_parse_from(["dots", "--initial-sample-rate", "44100"])
                .is_err()
        );
        assert!(
            Args::try_parse_from(["dots", "--initial-sample-rate", "10000"])
                .is_ok()
        );
    }

    #[test]
    fn rejects_non_finite_initial_freq() {
        for value in ["NaN", "inf", "-inf"] {
            assert!(
                Args::try_parse_from(["dots", "--initial-freq", value])
                    .is_err()
            );
        }
    }

    #[test]
    fn rejects_zero_fps() {
        assert!(Args::try_parse_from(["dots", "--fps", "0"]).is_err());
    }
}
