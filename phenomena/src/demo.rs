use crate::application::Application;
use crate::input::Key;
use crate::render::DrawList;

/// A program driven by [`crate::run`].
pub trait Demo {
    fn title(&self) -> &str;

    /// Called once before the first frame, typically to place the camera.
    fn setup(&mut self, _application: &mut Application) {}

    /// Called once per key press, before the frame's update.
    fn handle_key(&mut self, _application: &mut Application, _key: Key) {}

    fn update(&mut self, _application: &Application) {}

    fn render(&mut self, _application: &Application, _draw: &mut DrawList) {}
}
