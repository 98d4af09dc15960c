use phenomena::scenes::CubeOrbit;
use phenomena::{run, InputEvent, Key, RunConfig, ScriptedInput};

fn main() {
    phenomena::initialize_panic_hook();
    phenomena::initialize_logger();

    let mut demo = CubeOrbit::new();
    let mut script = [
        ScriptedInput::hold(0, 120, Key::Right),
        ScriptedInput::hold(120, 240, Key::Up),
    ]
    .concat();
    script.extend(ScriptedInput::drag(240, 255, 4.0, -2.0));
    script.push(ScriptedInput::new(260, InputEvent::Scrolled(3.0)));
    run(
        &mut demo,
        RunConfig {
            title: "3D Scene".to_string(),
            script,
            ..Default::default()
        },
    );
}
