use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::error::CmdResult;
use crate::model::Tokenizer;

#[derive(Parser, Debug)]
#[command(name = "cmdchain")]
#[command(about = "Dispatch a keyword command through an ordered handler chain", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command keywords, e.g. `create database`. Falls back to the configured default input.
    pub keywords: Vec<String>,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long, env = "CMDCHAIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level directive, overrides the config file
    #[arg(long, env = "CMDCHAIN_LOG")]
    pub log_level: Option<String>,

    /// Print the registered handlers in dispatch order and exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    /// Token sequence for this invocation: CLI keywords if any, else the config default.
    pub fn resolve_input(&self, config: &Config) -> CmdResult<Tokenizer> {
        if self.keywords.is_empty() {
            return Ok(Tokenizer::from(config.default_input.clone()));
        }

        Tokenizer::from_words(self.keywords.iter().map(String::as_str))
    }
}
