use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use value_slider::{
    Color, GestureDispatcher, PointerPosition, SliderRenderer, SliderState, ValueSlider,
    ValueSliderArgs,
};

mod terminal;

use terminal::TerminalRenderer;

/// Pointer id used for the replayed finger.
const FINGER: u64 = 0;

#[derive(Parser, Debug)]
#[command(name = "slider-demo")]
#[command(version, about = "Replay drags against a value slider", long_about = None)]
struct Cli {
    /// JSON file with slider arguments; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Lowest value
    #[arg(long, allow_negative_numbers = true)]
    min: Option<i64>,
    /// Highest value
    #[arg(long, allow_negative_numbers = true)]
    max: Option<i64>,
    /// Value shown before the first drag
    #[arg(long, allow_negative_numbers = true)]
    initial: Option<i64>,
    /// Caption drawn in the handle
    #[arg(long)]
    label: Option<String>,
    /// Icon token drawn in the handle
    #[arg(long)]
    icon: Option<String>,
    /// Highlight color, #rrggbb
    #[arg(long)]
    color: Option<Color>,
    /// Container width in pixels
    #[arg(long, default_value_t = 260.0)]
    width: f64,
    /// Container height in pixels (also the handle diameter)
    #[arg(long, default_value_t = 60.0)]
    height: f64,
    /// Terminal columns used for the track
    #[arg(long, default_value_t = 40)]
    columns: usize,
    /// Pointer moves per drag
    #[arg(long, default_value_t = 4)]
    steps: u32,
    /// Horizontal drag distances in pixels, replayed in order
    #[arg(allow_negative_numbers = true)]
    drags: Vec<f64>,
}

impl Cli {
    fn slider_args(&self) -> Result<ValueSliderArgs> {
        let mut args = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str::<ValueSliderArgs>(&text)
                    .with_context(|| format!("failed to parse {}", path.display()))?
            }
            None => ValueSliderArgs::default(),
        };
        if let Some(min) = self.min {
            args = args.min(min);
        }
        if let Some(max) = self.max {
            args = args.max(max);
        }
        if let Some(initial) = self.initial {
            args = args.initial_value(initial);
        }
        if let Some(label) = &self.label {
            args = args.label(label.as_str());
        }
        if let Some(icon) = &self.icon {
            args = args.icon(icon.as_str());
        }
        if let Some(color) = self.color {
            args = args.highlight_color(color);
        }
        Ok(args)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Replays one drag as a press, `steps` evenly spaced moves and a release.
fn replay_drag(
    dispatcher: &mut GestureDispatcher<SliderState>,
    renderer: &mut impl SliderRenderer,
    start: PointerPosition,
    distance: f64,
    steps: u32,
) {
    let state = dispatcher.handler().clone();
    dispatcher.handle_touch_start(FINGER, start);
    for step in 1..=steps.max(1) {
        let dx = distance * f64::from(step) / f64::from(steps.max(1));
        dispatcher.handle_touch_move(FINGER, PointerPosition::new(start.x + dx, start.y));
        renderer.draw(&state.scene());
    }
    dispatcher.handle_touch_end(FINGER);
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let args = cli.slider_args()?;
    let slider = ValueSlider::new(args).context("invalid slider configuration")?;
    let state = SliderState::new(slider);
    state.on_layout(cli.width, cli.height);

    let mut renderer = TerminalRenderer::new(cli.columns);
    renderer.draw(&state.scene());

    let mut dispatcher = GestureDispatcher::new(state.clone());
    for &distance in &cli.drags {
        // Grab the handle where it is drawn.
        let handle = state.scene().handle_center;
        let start = PointerPosition::new(handle.x.to_f64(), handle.y.to_f64());
        replay_drag(&mut dispatcher, &mut renderer, start, distance, cli.steps);
    }

    info!(
        value = state.value(),
        frames = renderer.frames(),
        "replay finished"
    );
    Ok(())
}
