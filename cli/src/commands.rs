pub mod demo;

use abacus_common::config::Language;
use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "abacus")]
#[command(about = "Walks through a calculator, a calculator manager and a factorial.")]
#[command(version)]
pub struct CommandLine {
    /// Language of the printed output (en, pt)
    #[arg(short, long, default_value_t = Language::English)]
    pub lang: Language,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Hide banner and headers
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show debug (-v) or trace (-vv) logs from the calculator core
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
