use phenomena::scenes::PhenomenaScene;
use phenomena::{run, Key, RunConfig, ScriptedInput};

fn main() {
    phenomena::initialize_panic_hook();
    phenomena::initialize_logger();

    let mut scene = match PhenomenaScene::new() {
        Ok(scene) => scene,
        Err(err) => {
            log::error!("Could not create particle systems: {err}");
            std::process::exit(1);
        }
    };

    // Show each phenomenon for five seconds while slowly walking forward.
    let digits = [Key::Digit1, Key::Digit2, Key::Digit3, Key::Digit4, Key::Digit5];
    let mut script: Vec<ScriptedInput> = digits
        .iter()
        .enumerate()
        .flat_map(|(index, key)| ScriptedInput::tap(index as u64 * 300, *key))
        .collect();
    script.extend(ScriptedInput::hold(1200, 1230, Key::W));

    run(
        &mut scene,
        RunConfig {
            title: "Natural Phenomena Simulation".to_string(),
            frames: 1500,
            script,
            ..Default::default()
        },
    );
}
