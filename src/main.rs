//! crudgen CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{ConfigCommand, GenerateCommand, MapCommand, ParseCommand};

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(version)]
#[command(about = "Scaffold ASP.NET Core boilerplate from DTO definitions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate boilerplate for an entity
    Generate(GenerateCommand),
    /// Extract the class name and properties from pasted DTO source
    Parse(ParseCommand),
    /// Generate an AutoMapper profile between two classes
    Map(MapCommand),
    /// Manage the saved configuration snapshot
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(command) => command.execute(),
        Commands::Parse(command) => command.execute(),
        Commands::Map(command) => command.execute(),
        Commands::Config { command } => command.execute(),
    }
}
