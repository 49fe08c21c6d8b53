mod timers;
pub use timers::*;
