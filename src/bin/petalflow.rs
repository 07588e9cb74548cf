//! Loads a flow effect definition from a toml file and either prints the json body that would be
//! written to a device, or checks that the effect is complete enough to send.

use clap::Parser;
use petalflow::cli::{execute, Action};
use petalflow::definition::FlowDefinition;
use std::io;

#[derive(clap::Parser)]
#[command(author, version = option_env!("PETALFLOW_VERSION").unwrap_or("dev"), about, long_about = None)]
struct CommandLineOptions {
  #[arg(short = 'c', long)]
  config: String,

  #[command(subcommand)]
  action: Action,
}

fn main() -> io::Result<()> {
  if dotenv::dotenv().is_err() {
    eprintln!("warning: no '.env' file detected'");
  }

  env_logger::init();
  let args = CommandLineOptions::parse();
  log::info!("loading flow definition from '{}'", args.config);
  let contents = std::fs::read_to_string(&args.config)?;
  let definition = FlowDefinition::from_toml(&contents)?;
  println!("{}", execute(&args.action, &definition)?);
  Ok(())
}
