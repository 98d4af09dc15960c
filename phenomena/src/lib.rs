//! Headless frame loop, fly camera and demos built on `phenomena_core`.

use itertools::Itertools;

pub use bytemuck;
pub use glam;
pub use phenomena_core;

pub mod application;
pub mod camera;
pub mod demo;
pub mod input;
pub mod render;
pub mod scenes;

pub use application::{Application, FrameClock};
pub use camera::{CameraUniforms, FlyCamera};
pub use demo::Demo;
pub use input::{InputEvent, Key, MouseButton, ScriptedInput};
pub use render::{BillboardInstance, DrawList, ParticleRenderer, ShapeInstance, ShapeKind};

pub struct RunConfig {
    pub title: String,
    /// Upper bound on the number of frames to run.
    pub frames: u64,
    /// Fixed time step in seconds. `None` measures real elapsed time.
    pub fixed_dt: Option<f32>,
    pub script: Vec<ScriptedInput>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            title: "Phenomena".to_string(),
            frames: 600,
            fixed_dt: Some(1.0 / 60.0),
            script: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct RunSummary {
    pub frames: u64,
    pub elapsed: f32,
    pub closed: bool,
    /// Draw data of the last rendered frame.
    pub last_frame: DrawList,
}

/// Drives `demo` until the frame budget is spent or a close is requested.
///
/// Each frame applies the scripted input due for it, advances the clock and
/// camera, updates the demo and collects its draw data.
pub fn run<D: Demo>(demo: &mut D, config: RunConfig) -> RunSummary {
    let clock = match config.fixed_dt {
        Some(dt) => FrameClock::fixed(dt),
        None => FrameClock::real_time(),
    };
    let mut application = Application::new(clock);
    demo.setup(&mut application);
    log::info!(
        "Running {} ({}) for up to {} frames",
        config.title,
        demo.title(),
        config.frames
    );

    let mut script = config
        .script
        .into_iter()
        .sorted_by_key(|input| input.frame)
        .peekable();
    let mut draw = DrawList::default();
    let mut frames = 0;
    while frames < config.frames {
        while let Some(input) = script.next_if(|input| input.frame <= frames) {
            if let Some(key) = application.handle_input(&input.event) {
                demo.handle_key(&mut application, key);
            }
        }
        if application.close_requested() {
            break;
        }

        let dt = application.update();
        demo.update(&application);
        draw.clear();
        demo.render(&application, &mut draw);
        log::debug!(
            "Frame {} dt={:.4}: {} shapes, {} billboards ({} bytes of instance data)",
            frames,
            dt,
            draw.shapes.len(),
            draw.billboards.len(),
            draw.shape_bytes().len() + draw.billboard_bytes().len()
        );
        frames += 1;
    }

    let summary = RunSummary {
        frames,
        elapsed: application.clock.elapsed(),
        closed: application.close_requested(),
        last_frame: draw,
    };
    log::info!(
        "Finished {} after {} frames ({:.2} s simulated)",
        demo.title(),
        summary.frames,
        summary.elapsed
    );
    summary
}

pub fn initialize_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    }
}

pub fn initialize_logger() {
    #[cfg(target_arch = "wasm32")]
    {
        // Fails only when a logger is already installed.
        let _ = console_log::init_with_level(log::Level::Info);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }
}
