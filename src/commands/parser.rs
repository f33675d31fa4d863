//! Parsing of raw input lines into commands.

use crate::error::{CommandError, CommandResult};

/// A user command with its arguments already split out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Delete { name: String },
    Exit,
}

/// Parse one line of input.
///
/// The first whitespace-separated word is the command, matched without regard
/// to case. Extra trailing arguments are ignored.
pub fn parse_input(line: &str) -> CommandResult<Command> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Err(CommandError::EmptyInput);
    };
    let args: Vec<&str> = words.collect();

    let command = match word.to_lowercase().as_str() {
        "hello" => Command::Hello,
        "add" => {
            let [name, phone] = take::<2>(&args, "add <name> <phone>")?;
            Command::Add { name, phone }
        }
        "change" => {
            let [name, old, new] = take::<3>(&args, "change <name> <old phone> <new phone>")?;
            Command::Change { name, old, new }
        }
        "phone" => {
            let [name] = take::<1>(&args, "phone <name>")?;
            Command::Phone { name }
        }
        "all" => Command::All,
        "add-birthday" => {
            let [name, birthday] = take::<2>(&args, "add-birthday <name> <DD.MM.YYYY>")?;
            Command::AddBirthday { name, birthday }
        }
        "show-birthday" => {
            let [name] = take::<1>(&args, "show-birthday <name>")?;
            Command::ShowBirthday { name }
        }
        "birthdays" => Command::Birthdays,
        "delete" => {
            let [name] = take::<1>(&args, "delete <name>")?;
            Command::Delete { name }
        }
        "close" | "exit" | "q" => Command::Exit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };

    Ok(command)
}

fn take<const N: usize>(args: &[&str], usage: &'static str) -> CommandResult<[String; N]> {
    if args.len() < N {
        return Err(CommandError::MissingArguments { usage });
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}
