//! A line-oriented interpreter of tree commands.
//!
//! A [`Session`] owns a tree of integers, and executes [`Command`]s parsed from lines of text,
//! such as `add 5` or `print`. Executing a command returns the text to show to the user.

use crate::avl::AVLTree;
use log::{info, LevelFilter};
use rand::{rngs::StdRng, Rng, SeedableRng};
use thiserror::Error;

/// The values of a random insertion are drawn from this range.
pub const RANDOM_RANGE: std::ops::Range<i64> = 0..1000;

/// The most values a single `random` command may insert.
pub const MAX_RANDOM_COUNT: usize = 100_000;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Command {
    /// Inserts the values, in order.
    Add(Vec<i64>),
    /// Inserts this many random values.
    Random(usize),
    Contains(i64),
    Height,
    Size,
    /// Lists the values in order.
    List,
    Print,
    Clear,
    Help,
    Quit,
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{0}` expects an argument")]
    MissingArgument(&'static str),
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("`{0}` takes no more arguments, got `{1}`")]
    ExtraArgument(&'static str, String),
    #[error("can't insert {0} random numbers at once, the limit is {}", MAX_RANDOM_COUNT)]
    TooManyRandom(usize),
}

pub const HELP: &str = "\
add <n>...     insert the numbers, in order
random <count> insert `count` random numbers (at most 100000)
contains <n>   check whether the number is in the tree
height         show the height of the tree
size           show the number of values in the tree
list           list the values in order
print          draw the tree
clear          remove all values
help           show this message
quit           exit";

impl Command {
    /// Parses a line. Words are separated by whitespace.
    ///```
    /// use avl_grove::command::{Command, CommandError};
    ///
    /// assert_eq!(Command::parse("add 3 -4"), Ok(Command::Add(vec![3, -4])));
    /// assert_eq!(Command::parse("  print "), Ok(Command::Print));
    /// assert_eq!(Command::parse("add x"), Err(CommandError::InvalidNumber("x".to_string())));
    ///```
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let command = match name {
            "add" => {
                let values = words.by_ref().map(parse_number).collect::<Result<Vec<i64>, _>>()?;
                if values.is_empty() {
                    return Err(CommandError::MissingArgument("add"));
                }
                Command::Add(values)
            }
            "random" => {
                let word = words.next().ok_or(CommandError::MissingArgument("random"))?;
                let count: usize = word
                    .parse()
                    .map_err(|_| CommandError::InvalidNumber(word.to_string()))?;
                if count > MAX_RANDOM_COUNT {
                    return Err(CommandError::TooManyRandom(count));
                }
                Command::Random(count)
            }
            "contains" => {
                let word = words.next().ok_or(CommandError::MissingArgument("contains"))?;
                Command::Contains(parse_number(word)?)
            }
            "height" => Command::Height,
            "size" => Command::Size,
            "list" => Command::List,
            "print" => Command::Print,
            "clear" => Command::Clear,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(name.to_string())),
        };
        match words.next() {
            None => Ok(command),
            Some(extra) => Err(CommandError::ExtraArgument(command.name(), extra.to_string())),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::Random(_) => "random",
            Command::Contains(_) => "contains",
            Command::Height => "height",
            Command::Size => "size",
            Command::List => "list",
            Command::Print => "print",
            Command::Clear => "clear",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

fn parse_number(word: &str) -> Result<i64, CommandError> {
    word.parse()
        .map_err(|_| CommandError::InvalidNumber(word.to_string()))
}

/// A tree, and the random number generator used by the `random` command.
pub struct Session {
    tree: AVLTree<i64>,
    rng: StdRng,
}

impl Session {
    /// A session whose random values come from a generator seeded from entropy.
    pub fn new() -> Self {
        Session {
            tree: AVLTree::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// A session whose random values are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Session {
            tree: AVLTree::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn tree(&self) -> &AVLTree<i64> {
        &self.tree
    }

    /// Executes the command and returns the text to show.
    /// Commands that change the tree return its drawing.
    ///```
    /// use avl_grove::command::{Command, Session};
    ///
    /// let mut session = Session::with_seed(0);
    /// let out = session.execute(Command::Add(vec![30, 10, 20]));
    /// assert_eq!(out, "20\n├─ 30\n└─ 10");
    /// assert_eq!(session.execute(Command::Height), "1");
    ///```
    pub fn execute(&mut self, command: Command) -> String {
        match command {
            Command::Add(values) => {
                for value in values {
                    self.tree.insert(value);
                }
                self.tree.to_string()
            }
            Command::Random(count) => {
                for _ in 0..count {
                    let value = self.rng.gen_range(RANDOM_RANGE);
                    self.tree.insert(value);
                }
                info!("inserted {} random values", count);
                self.tree.to_string()
            }
            Command::Contains(value) => self.tree.contains(&value).to_string(),
            Command::Height => self.tree.height().to_string(),
            Command::Size => self.tree.len().to_string(),
            Command::List => self
                .tree
                .iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join(" "),
            Command::Print => self.tree.to_string(),
            Command::Clear => {
                self.tree.clear();
                self.tree.to_string()
            }
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

/// Reads the log level from the value of the `AVL_LOG` variable, case insensitive.
/// Without a value the level is `Warn`. An invalid value is returned as the error.
pub fn log_level(value: Option<&str>) -> Result<LevelFilter, String> {
    match value {
        None => Ok(LevelFilter::Warn),
        Some(value) => value.trim().parse().map_err(|_| value.to_string()),
    }
}
