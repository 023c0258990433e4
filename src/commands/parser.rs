//! Input parsing: keyword table and argument splitting.

/// Every command the interpreter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    ShowAll,
    ShowIterated,
    Delete,
    Exit,
}

/// One row of the command table.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Keyword words, lowercase, matched case-insensitively.
    pub keyword: &'static [&'static str],
    /// Minimum number of arguments after the keyword.
    pub min_args: usize,
    pub command: Command,
}

/// The command table. Multi-word keywords come before any keyword that is
/// their prefix so the longest match wins.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec { keyword: &["show", "iterated"], min_args: 0, command: Command::ShowIterated },
    CommandSpec { keyword: &["show", "all"], min_args: 0, command: Command::ShowAll },
    CommandSpec { keyword: &["good", "bye"], min_args: 0, command: Command::Exit },
    CommandSpec { keyword: &["hello"], min_args: 0, command: Command::Hello },
    CommandSpec { keyword: &["add"], min_args: 2, command: Command::Add },
    CommandSpec { keyword: &["change"], min_args: 3, command: Command::Change },
    CommandSpec { keyword: &["phone"], min_args: 1, command: Command::Phone },
    CommandSpec { keyword: &["del"], min_args: 1, command: Command::Delete },
    CommandSpec { keyword: &["exit"], min_args: 0, command: Command::Exit },
    CommandSpec { keyword: &["close"], min_args: 0, command: Command::Exit },
];

/// A matched command with its verbatim arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub command: Command,
    pub keyword: String,
    pub min_args: usize,
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// Whether enough arguments were supplied.
    pub fn has_min_args(&self) -> bool {
        self.args.len() >= self.min_args
    }
}

/// Match `line` against the command table.
///
/// Keywords compare whole words, ignoring case; the remaining words are
/// returned unchanged as arguments. Returns `None` for unknown input.
pub fn parse(line: &str) -> Option<ParsedCommand> {
    let words: Vec<&str> = line.split_whitespace().collect();

    COMMANDS.iter().find_map(|spec| {
        let n = spec.keyword.len();
        if words.len() < n {
            return None;
        }

        let matches = spec
            .keyword
            .iter()
            .zip(&words)
            .all(|(kw, word)| word.eq_ignore_ascii_case(kw));
        if !matches {
            return None;
        }

        Some(ParsedCommand {
            command: spec.command,
            keyword: spec.keyword.join(" "),
            min_args: spec.min_args,
            args: words[n..].iter().map(|w| w.to_string()).collect(),
        })
    })
}
