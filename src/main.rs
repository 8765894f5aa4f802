use anyhow::{Error, Result};
use tp::arguments::parse_arguments;
use tp::dispatcher::{dispatch, Outcome};
use tp::display_control::display_message;
use tp::store::Store;

fn main() -> Result<(), Error> {
    // The scan sees the full argv, invocation token included: a bare `tp`
    // degenerates to looking up the program's own name, which lands on the
    // not-found message instead of crashing.
    let arguments: Vec<String> = std::env::args().collect();
    let command = parse_arguments(&arguments);

    let store: Store = Store::from_home_directory()?;

    match dispatch(command, &store)? {
        Outcome::Message(level, text) => display_message(level, &text),
        // Printed bare, unstyled: the wrapping shell function reads this
        // path and performs the actual `cd`. A child process cannot change
        // its parent shell's working directory.
        Outcome::ChangeDirectory(path) => println!("{}", path),
    }

    Ok(())
}
