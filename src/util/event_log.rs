use std::time::Duration;

pub const RESET: &str = "\x1b[0m";
pub const BLUE: &str = "\x1b[34m";
pub const YELLOW: &str = "\x1b[33m";
pub const MAGENTA: &str = "\x1b[35m";

#[derive(Debug)]
pub enum Event {
    TotalElapsed,
    DecodeHeader,
    ScanOpcodes,
}

impl Event {
    const fn color(&self) -> &'static str {
        match self {
            Self::TotalElapsed => YELLOW,
            Self::DecodeHeader => MAGENTA,
            Self::ScanOpcodes => BLUE,
        }
    }
}

pub fn log_event(msg: &str, event: Event, duration: Option<Duration>) {
    if let Some(duration) = duration {
        println!("{}{:?}\t{:?}\t{}", event.color(), duration, event, msg);
    } else {
        println!("{}{:?}\t{}", event.color(), event, msg)
    }

    if matches!(event, Event::TotalElapsed) {
        println!("{RESET}");
    }
}
