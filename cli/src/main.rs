mod commands;
mod terminal;

use abacus_common::config::Config;
use commands::{CommandLine, demo};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        lang: commands.lang,
    };

    print::banner(cfg.no_banner, cfg.quiet);
    demo::demo(&cfg)?;
    print::end_of_program(cfg.quiet);
    Ok(())
}
