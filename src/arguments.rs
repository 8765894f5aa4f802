/// Marker that introduces a command name on the command line.
pub const FLAG_MARKER: &str = "--";

/// A resolved invocation.
///
/// The scan takes the first `--`-prefixed token as the command name and
/// hands every argument after it over as an opaque parameter list; a
/// command line without any such token is a plain lookup of its last
/// argument. Unrecognized command names, including an empty one, fall back
/// to the help text rather than erroring out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Save { parameters: Vec<String> },
    Remove { parameters: Vec<String> },
    List,
    Help,
    Jump { target: Option<String> },
}

pub fn parse_arguments(arguments: &[String]) -> Command {
    for (index, argument) in arguments.iter().enumerate() {
        if let Some(name) = argument.strip_prefix(FLAG_MARKER) {
            let parameters: Vec<String> = arguments[index + 1..].to_vec();

            return match name {
                "save" => Command::Save { parameters },
                "remove" => Command::Remove { parameters },
                "list" => Command::List,
                _ => Command::Help,
            };
        }
    }

    Command::Jump {
        target: arguments.last().cloned(),
    }
}
