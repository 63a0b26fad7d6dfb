mod canvas;
mod cli;
mod color;
mod envelope;
mod geometry;
mod pattern;
mod raster;
mod sierpinski;

use anyhow::Result;
use canvas::{Stroke, StrokeList};
use clap::Parser;
use cli::Args;
use log::info;
use pattern::Pattern;
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn build_strokes(pattern: Pattern, window_height: f64, depth: u32) -> Vec<Stroke> {
    let mut list = StrokeList::new();
    pattern::render(&mut list, pattern, window_height, depth);
    list.into_strokes()
}

/// Progressive reveal of the stroke list, one batch per frame. Speed 1 plots
/// one stroke per frame; speed 10 plots a hundred, which is effectively
/// instant for these patterns.
struct Plot {
    strokes: Vec<Stroke>,
    revealed: usize,
    rendered: usize,
    per_frame: usize,
}

impl Plot {
    fn new(strokes: Vec<Stroke>, speed: u8) -> Self {
        Self {
            strokes,
            revealed: 0,
            rendered: 0,
            per_frame: (speed as usize).pow(2),
        }
    }

    /// Advance the reveal frontier. Returns false once everything is shown.
    fn reveal(&mut self) -> bool {
        if self.revealed == self.strokes.len() {
            return false;
        }
        self.revealed = (self.revealed + self.per_frame).min(self.strokes.len());
        true
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    info!(
        "pattern {:?}, depth {}, speed {}",
        args.pattern, args.depth, args.speed
    );

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Sierpinski Envelope Pattern")
        .with_inner_size(LogicalSize::new(900.0, 900.0))
        .with_min_inner_size(LogicalSize::new(320.0, 240.0))
        .build(&event_loop)?;

    let size = window.inner_size();
    let mut width = size.width;
    let mut height = size.height;
    let surface_texture = SurfaceTexture::new(width, height, &window);
    let mut pixels = Pixels::new(width, height, surface_texture)?;

    let mut plot = Plot::new(
        build_strokes(args.pattern, height as f64, args.depth),
        args.speed,
    );
    info!("{} strokes to plot", plot.strokes.len());
    let mut need_clear = true;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::KeyboardInput { input, .. } => {
                    handle_keyboard_input(input, control_flow);
                }
                WindowEvent::Resized(new_size) => {
                    width = new_size.width.max(1);
                    height = new_size.height.max(1);
                    if let Err(e) = pixels.resize_surface(width, height) {
                        eprintln!("Resize surface error: {e}");
                    }
                    if let Err(e) = pixels.resize_buffer(width, height) {
                        eprintln!("Resize buffer error: {e}");
                    }
                    // The figure is sized from the window height, so replot.
                    plot = Plot::new(
                        build_strokes(args.pattern, height as f64, args.depth),
                        args.speed,
                    );
                    need_clear = true;
                }
                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    width = new_inner_size.width.max(1);
                    height = new_inner_size.height.max(1);
                    if let Err(e) = pixels.resize_surface(width, height) {
                        eprintln!("Scale factor resize surface error: {e}");
                    }
                    if let Err(e) = pixels.resize_buffer(width, height) {
                        eprintln!("Scale factor resize buffer error: {e}");
                    }
                    plot = Plot::new(
                        build_strokes(args.pattern, height as f64, args.depth),
                        args.speed,
                    );
                    need_clear = true;
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if plot.reveal() || need_clear {
                    window.request_redraw();
                } else {
                    // Plot complete; idle until the window is closed.
                    *control_flow = ControlFlow::Wait;
                }
            }
            Event::RedrawRequested(_) => {
                if need_clear {
                    raster::clear(pixels.frame_mut(), args.bgcolor);
                    plot.rendered = 0;
                    need_clear = false;
                }
                let frame = pixels.frame_mut();
                for stroke in &plot.strokes[plot.rendered..plot.revealed] {
                    raster::draw_stroke(frame, width, height, stroke, args.color);
                }
                plot.rendered = plot.revealed;
                if let Err(e) = pixels.render() {
                    eprintln!("pixels.render() failed: {e}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

fn handle_keyboard_input(input: KeyboardInput, control_flow: &mut ControlFlow) {
    if let Some(VirtualKeyCode::Escape) = input.virtual_keycode {
        if input.state == ElementState::Pressed {
            *control_flow = ControlFlow::Exit;
        }
    }
}
