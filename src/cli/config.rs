//! Command-line configuration
//!
//! Global flags come first, then the command name, then the command's own
//! arguments. Each command validates its own arity, so everything after the
//! command name is passed through untouched (including things that look like
//! flags, such as `-5`).

/// The exercises reachable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Divide,
    Middle,
    Sum,
    Wc,
    SubSafe,
    List,
    Bitmap,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::Divide,
        Command::Middle,
        Command::Sum,
        Command::Wc,
        Command::SubSafe,
        Command::List,
        Command::Bitmap,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Command::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Divide => "divide",
            Command::Middle => "middle",
            Command::Sum => "sum",
            Command::Wc => "wc",
            Command::SubSafe => "subsafe",
            Command::List => "list",
            Command::Bitmap => "bitmap",
        }
    }

    /// One-line usage shown on argument errors
    pub fn usage(self) -> &'static str {
        match self {
            Command::Divide => "divide int1 int2",
            Command::Middle => "middle [x y z]",
            Command::Sum => "sum bin1 bin2",
            Command::Wc => "wc < input",
            Command::SubSafe => "subsafe x y",
            Command::List => "list [insert|split] [index]",
            Command::Bitmap => "bitmap filename [--view] [--glyph VALUE=CHAR]...",
        }
    }

    fn summary(self) -> &'static str {
        match self {
            Command::Divide => "quotient, remainder and real quotient of two integers",
            Command::Middle => "median of three numbers",
            Command::Sum => "add two 8-bit binary numbers",
            Command::Wc => "count words, lines and characters on stdin",
            Command::SubSafe => "1 if x - y fits in 32 bits, 0 on overflow",
            Command::List => "splice or split the demo linked list",
            Command::Bitmap => "decode a run-length encoded bitmap file",
        }
    }
}

/// Resolved configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Selected command (`None` only when help was requested)
    pub command: Option<Command>,

    /// Arguments following the command name
    pub args: Vec<String>,

    /// Print status diagnostics to stderr
    pub verbose: bool,

    /// Print usage and exit
    pub show_help: bool,
}

impl Config {
    /// Parse configuration from command-line arguments (program name excluded)
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut verbose = false;
        let mut show_help = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => show_help = true,
                flag if flag.starts_with('-') => {
                    return Err(format!("unknown option: {}", flag));
                }
                _ => break,
            }
            i += 1;
        }

        let command = match args.get(i) {
            Some(name) => Some(
                Command::from_name(name).ok_or_else(|| format!("unknown command: {}", name))?,
            ),
            None if show_help => None,
            None => return Err("no command given".to_string()),
        };

        Ok(Config {
            command,
            args: args.get(i + 1..).map(<[String]>::to_vec).unwrap_or_default(),
            verbose,
            show_help,
        })
    }
}

/// Full usage text
pub fn help_text(program_name: &str) -> String {
    let mut text = format!(
        "labkit: systems-programming coursework exercises\n\n\
         USAGE:\n    {} [--verbose] <command> [args...]\n\nCOMMANDS:\n",
        program_name
    );
    for command in Command::ALL {
        text.push_str(&format!(
            "    {:<50} {}\n",
            command.usage(),
            command.summary()
        ));
    }
    text.push_str(
        "\nOPTIONS:\n    --verbose, -v    Print status messages to stderr\n    --help, -h       Print this help\n",
    );
    text
}
