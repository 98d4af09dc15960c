#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    ZeroCapacity { emitter: &'static str },
    InvalidSpawnInterval { emitter: &'static str, interval: f32 },
    /// A vector setting is not finite, or its spawn box spans more than `f32` can hold.
    NonFiniteSetting { emitter: &'static str, setting: &'static str },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::ZeroCapacity { emitter } => {
                write!(f, "emitter '{emitter}' must have a capacity of at least one particle")
            }
            Error::InvalidSpawnInterval { emitter, interval } => write!(
                f,
                "emitter '{emitter}' has spawn interval {interval}, expected a finite positive number of seconds"
            ),
            Error::NonFiniteSetting { emitter, setting } => {
                write!(f, "emitter '{emitter}' has a non-finite {setting}")
            }
        }
    }
}

impl std::error::Error for Error {}
