use anyhow::Result;
use config::Config;
use env_logger::Env;
use icmp6::{MatchRecord, usage};
use log::debug;

use crate::cli::{Cli, Command};
use crate::config::OutputMode;

mod cli;
mod config;
mod rule;

fn main() -> Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("error"));

    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_ref())?;
    debug!("config: {config:?}");

    match cli.command {
        Command::Parse {
            numeric,
            output,
            record,
            args,
        } => {
            let parsed = rule::parse_rule_args(args.as_slice())?;
            rule::log_record(&parsed);

            let output = output.unwrap_or(config.output);
            print_record(&parsed, numeric || config.numeric, output, &config);
            if record {
                println!("{}", rule::encode_record(&parsed));
            }
        }
        Command::Types => print!("{}", usage()),
        Command::Decode { numeric, record } => {
            let decoded = rule::decode_record(&record)?;
            rule::log_record(&decoded);
            print_record(&decoded, numeric || config.numeric, config.output, &config);
        }
    }

    Ok(())
}

fn print_record(record: &MatchRecord, numeric: bool, output: OutputMode, config: &Config) {
    if output.shows_display() {
        if config.print_match_name {
            println!("{}", record.print(numeric));
        } else {
            println!("{}", record.display(numeric));
        }
    }
    if output.shows_save() {
        println!("{}", record.save());
    }
}
