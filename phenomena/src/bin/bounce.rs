use phenomena::scenes::BounceScene;
use phenomena::{run, RunConfig};

fn main() {
    phenomena::initialize_panic_hook();
    phenomena::initialize_logger();

    let mut scene = BounceScene::new();
    run(
        &mut scene,
        RunConfig {
            title: "Earth-like Bouncing Balls".to_string(),
            ..Default::default()
        },
    );
}
