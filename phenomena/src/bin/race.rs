use phenomena::scenes::Race;
use phenomena::{run, Key, RunConfig, ScriptedInput};

fn main() {
    phenomena::initialize_panic_hook();
    phenomena::initialize_logger();

    let mut race = Race::new();
    let script = ScriptedInput::tap(60, Key::Space).to_vec();
    run(
        &mut race,
        RunConfig {
            title: "CE Students Running Animation".to_string(),
            frames: 1800,
            script,
            ..Default::default()
        },
    );

    let finished = race.runners().iter().filter(|runner| runner.finished).count();
    log::info!("{} of {} runners crossed the line", finished, race.runners().len());
}
