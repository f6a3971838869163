//! A small line-oriented command language for driving an `AvlSet<i32>`.
//!
//! Each non-blank line holds one command: `insert <key>`, `remove <key>` (or `delete <key>`),
//! `search <key>` or `print`.

use crate::avl_tree::AvlSet;
use std::error;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::num::ParseIntError;
use std::result;

#[derive(Debug)]
pub enum Error {
    UnknownCommand(String),
    MissingKey(&'static str),
    UnexpectedArgument(String),
    InvalidKey(ParseIntError),
    IOError(io::Error),
}

impl From<ParseIntError> for Error {
    fn from(err: ParseIntError) -> Error {
        Error::InvalidKey(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::InvalidKey(error) => Some(error),
            Error::IOError(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnknownCommand(name) => write!(f, "unknown command `{}`", name),
            Error::MissingKey(name) => write!(f, "`{}` expects a key", name),
            Error::UnexpectedArgument(arg) => write!(f, "unexpected argument `{}`", arg),
            Error::InvalidKey(error) => write!(f, "invalid key: {}", error),
            Error::IOError(error) => write!(f, "{}", error),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Insert(i32),
    Remove(i32),
    Search(i32),
    Print,
}

impl Command {
    /// Parses a single line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let mut words = line.split_whitespace();
        let name = match words.next() {
            Some(name) => name,
            None => return Ok(None),
        };

        let command = match name {
            "insert" => Command::Insert(parse_key("insert", words.next())?),
            "remove" | "delete" => Command::Remove(parse_key("remove", words.next())?),
            "search" => Command::Search(parse_key("search", words.next())?),
            "print" => Command::Print,
            _ => return Err(Error::UnknownCommand(name.to_string())),
        };

        match words.next() {
            Some(arg) => Err(Error::UnexpectedArgument(arg.to_string())),
            None => Ok(Some(command)),
        }
    }

    /// Applies the command to `set`, writing search results and printed trees to `out`.
    pub fn apply<W>(self, set: &mut AvlSet<i32>, out: &mut W) -> Result<()>
    where
        W: Write,
    {
        match self {
            Command::Insert(key) => {
                if set.insert(key) {
                    info!("inserted {}", key);
                } else {
                    info!("{} is already present", key);
                }
            },
            Command::Remove(key) => match set.remove(&key) {
                Some(key) => info!("removed {}", key),
                None => info!("{} is not present", key),
            },
            Command::Search(key) => {
                let status = if set.contains(&key) {
                    "Found"
                } else {
                    "Not found"
                };
                writeln!(out, "Searching {}: {}", key, status)?;
            },
            Command::Print => write!(out, "{}", set)?,
        }
        Ok(())
    }
}

fn parse_key(name: &'static str, word: Option<&str>) -> Result<i32> {
    match word {
        Some(word) => Ok(word.parse()?),
        None => Err(Error::MissingKey(name)),
    }
}

/// Replays the fixed demo sequence on `set`, announcing each stage on `out`.
pub fn run_demo<W>(set: &mut AvlSet<i32>, out: &mut W) -> Result<()>
where
    W: Write,
{
    writeln!(out, "Inserting elements...")?;
    for key in &[100, 50, 200, 30, 60, 55] {
        Command::Insert(*key).apply(set, out)?;
    }
    Command::Print.apply(set, out)?;

    writeln!(out)?;
    Command::Search(60).apply(set, out)?;
    Command::Search(99).apply(set, out)?;

    for key in &[55, 50, 200] {
        writeln!(out, "\nRemoving {}...", key)?;
        Command::Remove(*key).apply(set, out)?;
        Command::Print.apply(set, out)?;
    }

    out.flush()?;
    Ok(())
}

/// Reads commands from `input` until it is exhausted and applies them to `set`.
///
/// Lines that fail to parse are logged and skipped. I/O errors on either end stop the run.
pub fn run<R, W>(input: R, set: &mut AvlSet<i32>, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        match Command::parse(&line) {
            Ok(Some(command)) => command.apply(set, out)?,
            Ok(None) => {},
            Err(err) => error!("line {}: {}", index + 1, err),
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{run, run_demo, Command, Error};
    use crate::avl_tree::AvlSet;
    use std::io::Cursor;

    #[test]
    fn test_parse() {
        assert_eq!(Command::parse("insert 5").unwrap(), Some(Command::Insert(5)));
        assert_eq!(Command::parse("  remove -3 ").unwrap(), Some(Command::Remove(-3)));
        assert_eq!(Command::parse("delete 7").unwrap(), Some(Command::Remove(7)));
        assert_eq!(Command::parse("search 60").unwrap(), Some(Command::Search(60)));
        assert_eq!(Command::parse("print").unwrap(), Some(Command::Print));
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        match Command::parse("frobnicate 1") {
            Err(Error::UnknownCommand(name)) => assert_eq!(name, "frobnicate"),
            other => panic!("unexpected result: {:?}", other),
        }
        match Command::parse("insert") {
            Err(Error::MissingKey(name)) => assert_eq!(name, "insert"),
            other => panic!("unexpected result: {:?}", other),
        }
        match Command::parse("search sixty") {
            Err(Error::InvalidKey(_)) => {},
            other => panic!("unexpected result: {:?}", other),
        }
        match Command::parse("print 1") {
            Err(Error::UnexpectedArgument(arg)) => assert_eq!(arg, "1"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::UnknownCommand("pop".to_string()).to_string(),
            "unknown command `pop`",
        );
        assert_eq!(Error::MissingKey("remove").to_string(), "`remove` expects a key");
    }

    #[test]
    fn test_run_demo() {
        let mut set = AvlSet::new();
        let mut out = Vec::new();
        run_demo(&mut set, &mut out).unwrap();

        let expected = "\
Inserting elements...
--- AVL tree (pre-order) ---
60 (H: 2, FB: 0)
50 (H: 1, FB: 0)
30 (H: 0, FB: 0)
55 (H: 0, FB: 0)
100 (H: 1, FB: -1)
200 (H: 0, FB: 0)
-----------------------------

Searching 60: Found
Searching 99: Not found

Removing 55...
--- AVL tree (pre-order) ---
60 (H: 2, FB: 0)
50 (H: 1, FB: 1)
30 (H: 0, FB: 0)
100 (H: 1, FB: -1)
200 (H: 0, FB: 0)
-----------------------------

Removing 50...
--- AVL tree (pre-order) ---
60 (H: 2, FB: -1)
30 (H: 0, FB: 0)
100 (H: 1, FB: -1)
200 (H: 0, FB: 0)
-----------------------------

Removing 200...
--- AVL tree (pre-order) ---
60 (H: 1, FB: 0)
30 (H: 0, FB: 0)
100 (H: 0, FB: 0)
-----------------------------
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_run_skips_bad_lines() {
        let input = Cursor::new("insert 2\nbogus\n\ninsert 1\ninsert x\nsearch 1\nsearch 3\n");
        let mut set = AvlSet::new();
        let mut out = Vec::new();
        run(input, &mut set, &mut out).unwrap();

        assert_eq!(set.keys(), vec![&1, &2]);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Searching 1: Found\nSearching 3: Not found\n",
        );
    }
}
