//! Terminal backends for the hardware traits.
//!
//! These let the quiz run on a desktop: keys stand in for stick flicks,
//! tones are logged and timed, and screens are printed as text.

mod buzzer;
mod keyboard;
mod terminal;

pub use buzzer::ConsoleBuzzer;
pub use keyboard::KeyboardJoystick;
pub use terminal::TerminalRenderer;
