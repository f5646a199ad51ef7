use roster::{Store, User, UserId,
    backend::{BackendError, UserStore, JsonStore},
    domain::DomainError};

use std::path::PathBuf;
use anyhow::{self, Context};
use colored::Colorize;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(version, about, propagate_version = true)]
struct Cli {
   /// Path to users file to operate on
   #[clap(value_parser)]
    path: PathBuf,

   /// Action to perform
   #[clap(subcommand)]
   action: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// List all users
    List,
    /// Show a single user
    Show(UserRef),
    /// Add a new user
    Add(AddUser),
    /// Change the name of a user
    Rename(RenameUser),
    /// Remove a user
    Remove(UserRef),
}

#[derive(Args, Debug)]
struct UserRef {
    /// Id of the user
    #[clap(value_parser, allow_negative_numbers = true)]
    id: UserId
}

#[derive(Args, Debug)]
struct AddUser {
    /// Name of the user to be added
    #[clap(value_parser)]
    name: String
}

#[derive(Args, Debug)]
struct RenameUser {
    #[clap(value_parser, allow_negative_numbers = true)]
    id: UserId,

    /// New name for the user
    #[clap(value_parser)]
    name: String
}

fn print_user(user: &User) {
    println!("{} {}", format!("{:>6}", user.id).bold(), user.name);
}

fn print_change(verb: &str, user: &User) {
    print!("{} ", verb.green());
    print_user(user);
}

impl AddUser {
    fn add_user(self, users: &mut Store) -> anyhow::Result<User> {
        let user = User::new(users.next_id()?, &self.name);
        users.insert(user.clone());
        return Ok(user);
    }
}

/// A missing file is an empty store only when adding to it.
fn read_users(store: &JsonStore, action: &Subcommands) -> anyhow::Result<Store> {
    match store.read() {
        Err(BackendError::Unavailable { .. }) if matches!(action, Subcommands::Add(_)) => Ok(Store::new()),
        res => res.with_context(|| "failed to read users")
    }
}

fn run(store: &JsonStore, action: Subcommands) -> anyhow::Result<()> {
    let mut users = read_users(store, &action)?;

    match action {
        Subcommands::List => {
            if users.is_empty() {
                println!("{}", "no users".dimmed());
            }
            for user in users.iter() {
                print_user(user);
            }
            return Ok(());
        },
        Subcommands::Show(user_ref) => {
            let user = users.get(user_ref.id)
                .ok_or(DomainError::UnknownUser(user_ref.id))?;
            print_user(user);
            return Ok(());
        },
        Subcommands::Add(add_user) => {
            let user = add_user.add_user(&mut users)?;
            print_change("added", &user);
        },
        Subcommands::Rename(rename) => {
            let user = users.rename(rename.id, rename.name)
                .ok_or(DomainError::UnknownUser(rename.id))?;
            print_change("renamed", user);
        },
        Subcommands::Remove(user_ref) => {
            let user = users.remove(user_ref.id)
                .ok_or(DomainError::UnknownUser(user_ref.id))?;
            print_change("removed", &user);
        }
    }

    store.save(&users).with_context(|| "failed to save users")?;
    return Ok(());
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let store = JsonStore::new(&args.path);
    run(&store, args.action)
}
