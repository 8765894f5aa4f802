#[cfg(test)]
mod tests {
    use tp::arguments::{parse_arguments, Command};

    fn arguments(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|token| token.to_string()).collect()
    }

    #[test]
    fn test_first_flag_token_selects_the_command() {
        let command = parse_arguments(&arguments(&["tp", "--save", "proj"]));
        assert_eq!(
            command,
            Command::Save {
                parameters: vec!["proj".to_string()]
            }
        );
    }

    #[test]
    fn test_everything_after_the_command_is_an_opaque_parameter() {
        // Later flag-looking tokens are parameters, not commands.
        let command = parse_arguments(&arguments(&["tp", "--save", "--list"]));
        assert_eq!(
            command,
            Command::Save {
                parameters: vec!["--list".to_string()]
            }
        );
    }

    #[test]
    fn test_list_takes_no_parameters() {
        let command = parse_arguments(&arguments(&["tp", "ignored", "--list", "also-ignored"]));
        assert_eq!(command, Command::List);
    }

    #[test]
    fn test_remove_collects_its_parameters() {
        let command = parse_arguments(&arguments(&["tp", "--remove", "proj", "extra"]));
        assert_eq!(
            command,
            Command::Remove {
                parameters: vec!["proj".to_string(), "extra".to_string()]
            }
        );
    }

    #[test]
    fn test_unknown_command_falls_back_to_help() {
        let command = parse_arguments(&arguments(&["tp", "--frobnicate"]));
        assert_eq!(command, Command::Help);
    }

    #[test]
    fn test_bare_marker_falls_back_to_help() {
        let command = parse_arguments(&arguments(&["tp", "--"]));
        assert_eq!(command, Command::Help);
    }

    #[test]
    fn test_flagless_invocation_looks_up_the_last_argument() {
        let command = parse_arguments(&arguments(&["tp", "first", "proj"]));
        assert_eq!(
            command,
            Command::Jump {
                target: Some("proj".to_string())
            }
        );
    }

    #[test]
    fn test_zero_user_arguments_degenerate_to_the_program_token() {
        let command = parse_arguments(&arguments(&["tp"]));
        assert_eq!(
            command,
            Command::Jump {
                target: Some("tp".to_string())
            }
        );
    }

    #[test]
    fn test_empty_argv_stays_clean() {
        let command = parse_arguments(&[]);
        assert_eq!(command, Command::Jump { target: None });
    }
}
