pub mod bounce;
pub mod breakout;
pub mod orbit;
pub mod phenomena;
pub mod race;

pub use bounce::BounceScene;
pub use breakout::Breakout;
pub use orbit::CubeOrbit;
pub use phenomena::PhenomenaScene;
pub use race::Race;
