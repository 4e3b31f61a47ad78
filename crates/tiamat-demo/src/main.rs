//! Scripted 2D camera session over the tiamat value types.
//!
//! Follows the classic "2d camera" walkthrough (offset panning, wheel zoom
//! with clamping, rotation, reset) without opening a window: each frame's
//! derived view rectangle and HUD geometry are computed with `tiamat-geom`
//! and logged instead of drawn.

use std::sync::Once;

use log::{debug, info};
use tiamat_geom::{Color, Rectangle, Vector2};

const SCREEN_WIDTH: f32 = 800.0;
const SCREEN_HEIGHT: f32 = 450.0;

/// The boundary's 2D camera record.
#[derive(Debug, Copy, Clone)]
struct Camera2D {
    offset: Vector2,
    target: Vector2,
    /// Degrees, positive counter-clockwise.
    rotation: f32,
    zoom: f32,
}

impl Camera2D {
    fn centered() -> Self {
        Self {
            offset: Vector2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            target: Vector2::zero(),
            rotation: 0.0,
            zoom: 1.0,
        }
    }

    /// World-space rectangle visible through this camera.
    ///
    /// Rotation only tilts the frame, so it does not enter the extent.
    fn view_rect(&self) -> Rectangle {
        let size = Vector2::new(SCREEN_WIDTH, SCREEN_HEIGHT) / self.zoom;
        let top_left = self.target - self.offset / self.zoom;
        Rectangle::from((top_left, size))
    }
}

/// One frame of scripted operator input.
#[derive(Debug, Copy, Clone)]
enum Input {
    PanRight,
    PanLeft,
    ZoomIn,
    ZoomOut,
    RotateCw,
    RotateCcw,
    Reset,
}

fn update(camera: &mut Camera2D, input: Input) {
    match input {
        Input::PanRight => camera.offset.x -= 10.0,
        Input::PanLeft => camera.offset.x += 10.0,
        Input::ZoomIn => camera.zoom += 0.125,
        Input::ZoomOut => camera.zoom -= 0.125,
        Input::RotateCw => camera.rotation -= 5.0,
        Input::RotateCcw => camera.rotation += 5.0,
        Input::Reset => {
            camera.zoom = 1.0;
            camera.rotation = 0.0;
        }
    }
    camera.zoom = camera.zoom.clamp(0.1, 3.0);
    camera.rotation = camera.rotation.clamp(-40.0, 40.0);
}

static INIT: Once = Once::new();

/// Initializes the global logger once; honors `RUST_LOG`, defaults to info.
fn init_logging() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }
        builder.init();
        debug!("logging initialized");
    });
}

fn main() {
    init_logging();

    println!();
    println!("  tiamat camera demo  ·  scripted 2d camera pass");
    println!();

    let world = Rectangle::from_ltrb(-600.0, -400.0, 600.0, 400.0);
    let mut camera = Camera2D::centered();
    info!("world bounds {} ({} x {})", world, world.width, world.height);

    // HUD geometry from the windowed version of this walkthrough: four
    // border strips and a tinted help panel.
    let border = [
        Rectangle::new(0.0, 0.0, SCREEN_WIDTH, 5.0),
        Rectangle::new(0.0, 5.0, 5.0, SCREEN_HEIGHT - 10.0),
        Rectangle::new(SCREEN_WIDTH - 5.0, 5.0, 5.0, SCREEN_HEIGHT - 10.0),
        Rectangle::new(0.0, SCREEN_HEIGHT - 5.0, SCREEN_WIDTH, 5.0),
    ];
    let panel = Rectangle::new(10.0, 10.0, 250.0, 113.0);
    let panel_tint = Color::SKYBLUE.fade(0.5);
    debug!(
        "hud: {} border strips, panel {} tint 0x{:08X}",
        border.len(),
        panel,
        panel_tint.to_packed()
    );

    let script = [
        Input::PanRight,
        Input::PanRight,
        Input::PanRight,
        Input::ZoomIn,
        Input::ZoomIn,
        Input::RotateCcw,
        Input::PanLeft,
        Input::ZoomOut,
        Input::ZoomOut,
        Input::ZoomOut,
        Input::RotateCw,
        Input::RotateCw,
        Input::Reset,
    ];

    for (frame, &input) in script.iter().enumerate() {
        update(&mut camera, input);
        let view = camera.view_rect();
        let visible = world
            .intersect(view)
            .map_or(0.0, |i| i.width * i.height / (world.width * world.height));
        info!(
            "frame {:>2}  {:<9}  zoom {:.3}  rot {:>5.1}  view {}  center {}  world visible {:>5.1}%",
            frame,
            format!("{input:?}"),
            camera.zoom,
            camera.rotation,
            view,
            view.center(),
            visible * 100.0
        );
        if !world.contains(view.center()) {
            info!("         view center {} left the world bounds", view.center());
        }
    }

    let final_view = camera.view_rect();
    println!();
    println!("  final camera  offset {}  target {}", camera.offset, camera.target);
    println!("  final view    {}  (center {})", final_view, final_view.center());
    println!();
}
