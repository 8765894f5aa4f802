use console::style;

#[derive(Debug, Clone, Copy)]
pub enum Level {
    ProgramOutput,
    Logging,
    Error,
    Warn,
}

pub fn display_message(level: Level, message: &str) {
    match level {
        Level::Logging => println!("{}", style(message).green()),
        Level::Error => println!("{}", style(message).red().bold()),
        Level::ProgramOutput => println!("{}", style(message).cyan()),
        Level::Warn => println!("{}", style(message).red()),
    }
}
