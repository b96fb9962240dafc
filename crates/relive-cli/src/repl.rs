//! 標準入力の 1 行をコマンドに変換する

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Load,
    Unload,
    Status,
    Help,
    Quit,
}

pub const HELP: &str = "commands: load | reload | unload | status | help | quit";

/// 空行は None、未知のコマンドは Err(入力そのまま)
pub fn parse_line(line: &str) -> Option<Result<ReplCommand, String>> {
    let word = line.trim();
    if word.is_empty() {
        return None;
    }
    let command = match word.to_ascii_lowercase().as_str() {
        "load" | "reload" => ReplCommand::Load,
        "unload" => ReplCommand::Unload,
        "status" => ReplCommand::Status,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        _ => return Some(Err(word.to_string())),
    };
    Some(Ok(command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::load("load", ReplCommand::Load)]
    #[case::reload("reload", ReplCommand::Load)]
    #[case::unload("  unload\n", ReplCommand::Unload)]
    #[case::status("STATUS", ReplCommand::Status)]
    #[case::help("?", ReplCommand::Help)]
    #[case::exit("exit", ReplCommand::Quit)]
    fn parses_known_commands(#[case] line: &str, #[case] expected: ReplCommand) {
        assert_eq!(parse_line(line), Some(Ok(expected)));
    }

    #[test]
    fn blank_line_is_ignored() {
        assert_eq!(parse_line("   \n"), None);
    }

    #[test]
    fn unknown_command_is_returned() {
        assert_eq!(parse_line(" frobnicate "), Some(Err("frobnicate".to_string())));
    }
}
