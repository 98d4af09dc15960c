use std::collections::HashSet;

use glam::Vec2;
use web_time::Instant;

use crate::camera::FlyCamera;
use crate::input::{InputEvent, Key, MouseButton};

#[derive(Clone, Copy, Debug)]
enum ClockMode {
    RealTime { previous: Instant },
    Fixed { dt: f32 },
}

/// Frame timing. Either measured against the wall clock or advanced by a
/// fixed step, which keeps headless runs reproducible.
#[derive(Clone, Debug)]
pub struct FrameClock {
    mode: ClockMode,
    delta: f32,
    elapsed: f32,
    frame: u64,
}

impl FrameClock {
    pub fn real_time() -> Self {
        Self::with_mode(ClockMode::RealTime {
            previous: Instant::now(),
        })
    }

    pub fn fixed(dt: f32) -> Self {
        Self::with_mode(ClockMode::Fixed { dt: dt.max(0.0) })
    }

    fn with_mode(mode: ClockMode) -> Self {
        Self {
            mode,
            delta: 0.0,
            elapsed: 0.0,
            frame: 0,
        }
    }

    /// Starts a new frame and returns its delta time in seconds.
    pub fn tick(&mut self) -> f32 {
        self.delta = match &mut self.mode {
            ClockMode::RealTime { previous } => {
                let now = Instant::now();
                let dt = (now - *previous).as_secs_f32();
                *previous = now;
                dt
            }
            ClockMode::Fixed { dt } => *dt,
        };
        self.elapsed += self.delta;
        self.frame += 1;
        self.delta
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Number of frames started so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

/// Per-program state shared by the frame loop and the running demo.
#[derive(Clone, Debug)]
pub struct Application {
    pub clock: FrameClock,
    pub camera: FlyCamera,
    held_keys: HashSet<Key>,
    held_buttons: HashSet<MouseButton>,
    /// Left-button drag collected since the last `update`.
    pending_drag: Vec2,
    drag: Vec2,
    mouse_captured: bool,
    close_requested: bool,
}

impl Application {
    pub fn new(clock: FrameClock) -> Self {
        Self {
            clock,
            camera: FlyCamera::default(),
            held_keys: HashSet::new(),
            held_buttons: HashSet::new(),
            pending_drag: Vec2::ZERO,
            drag: Vec2::ZERO,
            mouse_captured: true,
            close_requested: false,
        }
    }

    /// Applies one input event. Returns the key if it just went down, so
    /// demos only see each press once however long it is held.
    pub fn handle_input(&mut self, event: &InputEvent) -> Option<Key> {
        match *event {
            InputEvent::KeyPressed(key) => {
                if !self.held_keys.insert(key) {
                    return None;
                }
                match key {
                    Key::Escape => self.request_close(),
                    Key::F1 => {
                        self.mouse_captured = !self.mouse_captured;
                        log::info!(
                            "Mouse {}",
                            if self.mouse_captured {
                                "captured"
                            } else {
                                "released"
                            }
                        );
                    }
                    _ => {}
                }
                Some(key)
            }
            InputEvent::KeyReleased(key) => {
                self.held_keys.remove(&key);
                None
            }
            InputEvent::ButtonPressed(button) => {
                self.held_buttons.insert(button);
                None
            }
            InputEvent::ButtonReleased(button) => {
                self.held_buttons.remove(&button);
                None
            }
            InputEvent::MouseMoved { dx, dy } => {
                if self.held_buttons.contains(&MouseButton::Left) {
                    self.pending_drag += Vec2::new(dx, dy);
                } else if self.mouse_captured {
                    self.camera.look(dx, dy);
                }
                None
            }
            InputEvent::Scrolled(notches) => {
                self.camera.scroll(notches);
                None
            }
        }
    }

    /// Starts a frame: ticks the clock and moves the camera by the held keys.
    pub fn update(&mut self) -> f32 {
        let dt = self.clock.tick();
        self.drag = std::mem::take(&mut self.pending_drag);
        self.camera.process_keys(&self.held_keys, dt);
        dt
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held_keys.contains(&key)
    }

    /// Pointer motion made with the left button held during the input
    /// that preceded the current frame. Positive `y` points up.
    pub fn drag(&self) -> Vec2 {
        self.drag
    }

    pub fn mouse_captured(&self) -> bool {
        self.mouse_captured
    }

    pub fn set_mouse_captured(&mut self, captured: bool) {
        self.mouse_captured = captured;
    }

    pub fn request_close(&mut self) {
        if !self.close_requested {
            log::info!("Close requested");
        }
        self.close_requested = true;
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }
}
