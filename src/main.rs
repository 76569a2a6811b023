// Allow unused code for test-only accessors and designed API surface
#![allow(dead_code)]

mod display;
mod math2d;
mod particles;
mod raster;
mod scene;
mod util;

use display::{Display, InputEvent, PixelBuffer, RenderTarget, SCREEN_HEIGHT, SCREEN_WIDTH};
use scene::Constellation;
use sdl2::keyboard::Keycode;
use util::FrameCounter;

/// Fixed seed: every run drifts the same way
const SCENE_SEED: u64 = 0xD07F_1E1D;

fn main() -> Result<(), String> {
    let (mut display, texture_creator) = Display::new("dotfield")?;
    let mut target = RenderTarget::new(&texture_creator)?;
    let mut buffer = PixelBuffer::new();

    let mut scene = Constellation::new(SCREEN_WIDTH, SCREEN_HEIGHT, SCENE_SEED);
    let mut frames = FrameCounter::new();

    println!("=== dotfield ===");
    println!("Resolution: {}x{}", display.width(), display.height());
    println!("Escape or close the window to quit.");

    'main: loop {
        for event in display.poll_events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Keycode::Escape) => break 'main,
                InputEvent::KeyDown(_) => {},
            }
        }

        scene.update();
        scene.render(&mut buffer);
        display.present(&mut target, &buffer)?;

        if let Some(count) = frames.frame() {
            println!("FPS: {}", count);
        }
    }

    Ok(())
}
