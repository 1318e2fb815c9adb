mod quiz_vm;
mod ticker;

pub use quiz_vm::{QuizIntent, QuizScreen, SignalRenderer, intent_event, tier_color};
pub use ticker::SignalTicker;
