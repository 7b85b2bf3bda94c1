//! Screen implementations, one per game phase.

mod complete;
mod intro;
mod mission1;
mod mission2;

pub use complete::CompleteScreen;
pub use intro::IntroScreen;
pub use mission1::Mission1Screen;
pub use mission2::Mission2Screen;
