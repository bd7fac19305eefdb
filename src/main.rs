//! # Parallax Viewer Entry Point
//!
//! Parses the command line, sets up logging and macroquad, builds the demo
//! room, and runs the main loop.

use clap::{Parser, ValueEnum};
use log::info;
use macroquad::prelude::*;
use parallax::{
    config, CompositingMode, InputMode, Layer, Object, ParallaxResult, PixelSurface, Position,
    Room, Surface, Viewer,
};
use std::rc::Rc;

/// Command line arguments for the parallax viewer.
#[derive(Parser, Debug)]
#[command(name = "parallax")]
#[command(about = "A layered 2D scene viewer with parallax scrolling")]
#[command(version)]
struct Args {
    /// Movement policy: sample held keys every frame, or one step per press
    #[arg(long, value_enum, default_value_t = InputModeArg::Continuous)]
    input: InputModeArg,

    /// Layer compositing policy
    #[arg(long, value_enum, default_value_t = CompositingArg::Cached)]
    compositing: CompositingArg,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// CLI spelling of [`InputMode`].
#[derive(ValueEnum, Debug, Clone, Copy)]
enum InputModeArg {
    Continuous,
    Discrete,
}

impl From<InputModeArg> for InputMode {
    fn from(arg: InputModeArg) -> Self {
        match arg {
            InputModeArg::Continuous => InputMode::Continuous,
            InputModeArg::Discrete => InputMode::Discrete,
        }
    }
}

/// CLI spelling of [`CompositingMode`].
#[derive(ValueEnum, Debug, Clone, Copy)]
enum CompositingArg {
    Cached,
    Immediate,
}

impl From<CompositingArg> for CompositingMode {
    fn from(arg: CompositingArg) -> Self {
        match arg {
            CompositingArg::Cached => CompositingMode::Cached,
            CompositingArg::Immediate => CompositingMode::Immediate,
        }
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Parallax Room Viewer".to_string(),
        window_width: config::SCREEN_WIDTH,
        window_height: config::SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() -> ParallaxResult<()> {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    info!("Starting parallax viewer v{}", parallax::VERSION);
    set_pc_assets_folder("assets");

    let (room, center) = build_demo_room(args.compositing.into()).await?;
    info!("Demo room loaded ({} layers)", room.layer_count());

    let mut viewer = Viewer::new(room, center, args.input.into());
    viewer.run().await
}

/// Initializes env_logger at the requested level.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

/// Loads one layer: background image plus, under the cached policy, an
/// offscreen composite buffer of the same size.
async fn load_layer(path: &str, mode: CompositingMode) -> ParallaxResult<Layer<PixelSurface>> {
    let background = PixelSurface::load(path).await?;
    Ok(match mode {
        CompositingMode::Immediate => Layer::immediate(background),
        CompositingMode::Cached => {
            let buffer =
                PixelSurface::offscreen(background.width() as u32, background.height() as u32);
            Layer::cached(background, buffer)
        }
    })
}

/// Builds the compiled-in demo scene: a play field with trees, clouds
/// drifting above it, parallax anchored to the play layer.
async fn build_demo_room(
    mode: CompositingMode,
) -> ParallaxResult<(Room<PixelSurface>, Rc<Layer<PixelSurface>>)> {
    let mut play = load_layer("play.png", mode).await?;
    let mut clouds = load_layer("clouds.png", mode).await?;

    let tree = Rc::new(Object::new(PixelSurface::load("tree.png").await?));
    let cloud = Rc::new(Object::new(PixelSurface::load("cloud.png").await?));

    for (x, y) in [(45.0, 100.0), (60.0, 300.0), (600.0, 800.0), (200.0, 800.0)] {
        play.add_object(Position::new(x, y), Rc::clone(&tree));
    }
    for (x, y) in [(10.0, 10.0), (100.0, 10.0), (300.0, 10.0), (10.0, 400.0)] {
        clouds.add_object(Position::new(x, y), Rc::clone(&cloud));
    }

    let play = Rc::new(play);
    let mut room = Room::new();
    room.add_layer(Rc::clone(&play));
    room.add_layer(Rc::new(clouds));

    Ok((room, play))
}
