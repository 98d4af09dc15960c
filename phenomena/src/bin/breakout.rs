use phenomena::scenes::breakout::RoundState;
use phenomena::scenes::Breakout;
use phenomena::{run, Key, RunConfig, ScriptedInput};

fn main() {
    phenomena::initialize_panic_hook();
    phenomena::initialize_logger();

    let mut game = Breakout::new();
    let script = [
        ScriptedInput::hold(30, 45, Key::Left),
        ScriptedInput::hold(90, 120, Key::Right),
    ]
    .concat();
    let summary = run(
        &mut game,
        RunConfig {
            title: "Breakout".to_string(),
            frames: 1200,
            script,
            ..Default::default()
        },
    );
    log::info!(
        "{} of 40 bricks left after {} frames{}",
        game.active_bricks(),
        summary.frames,
        if game.state() == RoundState::Over {
            ", ball lost"
        } else {
            ""
        }
    );
}
