//! The built-in emitters, one per natural phenomenon.

mod coffee;
mod dust;
mod fire;
mod rain;
mod waterfall;

pub use coffee::CoffeeCeremony;
pub use dust::Dust;
pub use fire::Fire;
pub use rain::Rain;
pub use waterfall::Waterfall;

use crate::{Emitter, EmitterKind};

/// Boxed emitter with its default tuning.
pub fn default_emitter(kind: EmitterKind) -> Box<dyn Emitter> {
    match kind {
        EmitterKind::Rain => Box::new(Rain::default()),
        EmitterKind::Waterfall => Box::new(Waterfall::default()),
        EmitterKind::Fire => Box::new(Fire::default()),
        EmitterKind::Dust => Box::new(Dust::default()),
        EmitterKind::CoffeeCeremony => Box::new(CoffeeCeremony::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_their_kind_and_validate() {
        for kind in EmitterKind::ALL {
            let emitter = default_emitter(kind);
            assert_eq!(emitter.kind(), kind);
            assert!(emitter.config().validate(emitter.name()).is_ok());
        }
    }
}
