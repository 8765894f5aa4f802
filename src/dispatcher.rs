use anyhow::{Error, Result};

use crate::arguments::Command;
use crate::display_control::Level;
use crate::store::{AliasMap, Store, SEPARATOR};

/// What an invocation asks of its caller once the command has run: either
/// text to display, or a change of working directory that only the
/// surrounding shell can perform on the process's behalf.
#[derive(Debug)]
pub enum Outcome {
    Message(Level, String),
    ChangeDirectory(String),
}

/// Executes a command against the store. Mutating commands run a full
/// read-modify-write cycle over the configuration file.
pub fn dispatch(command: Command, store: &Store) -> Result<Outcome, Error> {
    match command {
        Command::Save { parameters } => save_location(store, &parameters),
        Command::Remove { parameters } => remove_location(store, &parameters),
        Command::List => list_locations(store),
        Command::Help => Ok(help(store)),
        Command::Jump { target } => jump_to_location(store, target),
    }
}

fn save_location(store: &Store, parameters: &[String]) -> Result<Outcome, Error> {
    let alias: &String = match parameters.first() {
        Some(alias) => alias,
        None => return Ok(help(store)),
    };

    let current_directory: String = std::env::current_dir()?.to_string_lossy().to_string();

    let mut mapping: AliasMap = store.read()?;
    mapping.set(alias, &current_directory);
    store.write(&mapping)?;

    Ok(Outcome::Message(
        Level::Logging,
        format!("Saved {} {} {}", alias, SEPARATOR, current_directory),
    ))
}

fn remove_location(store: &Store, parameters: &[String]) -> Result<Outcome, Error> {
    let alias: &String = match parameters.first() {
        Some(alias) => alias,
        None => return Ok(help(store)),
    };

    // Removing an alias that was never saved is not an error; the mapping
    // is simply written back unchanged.
    let mut mapping: AliasMap = store.read()?;
    mapping.remove(alias);
    store.write(&mapping)?;

    Ok(Outcome::Message(
        Level::Logging,
        format!("Removed {}", alias),
    ))
}

fn list_locations(store: &Store) -> Result<Outcome, Error> {
    let mapping: AliasMap = store.read()?;

    let mut text: String = String::from("Saved locations:");
    for (alias, path) in mapping.iter() {
        text.push_str(&format!("\n- {} {} {}", alias, SEPARATOR, path));
    }

    Ok(Outcome::Message(Level::ProgramOutput, text))
}

fn jump_to_location(store: &Store, target: Option<String>) -> Result<Outcome, Error> {
    let mapping: AliasMap = store.read()?;
    let target: String = target.unwrap_or_default();

    if let Some(path) = mapping.get(&target) {
        return Ok(Outcome::ChangeDirectory(path.to_string()));
    }

    Ok(Outcome::Message(
        Level::Warn,
        format!(
            "Location '{}' not found! See all saved locations by using --list",
            target
        ),
    ))
}

fn help(store: &Store) -> Outcome {
    let text: String = format!(
        "Configuration file location: {}\n\
         Commands:\n\
         tp <location> - Go to the saved location\n\
         tp --list - Show list of saved locations\n\
         tp --save <location> - Save current directory as <location>\n\
         tp --remove <location> - Remove <location>",
        store.get_location().display()
    );

    Outcome::Message(Level::ProgramOutput, text)
}
