//! liveout command-line tool.

use anyhow::Result;
use liveout::analysis::{Liveness, LocalSets};
use liveout::cfg::CFGInfo;
use liveout::{frontend, report};
use log::debug;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "liveout-util", about = "liveout utility.")]
struct Options {
    #[structopt(short, long)]
    debug: bool,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    #[structopt(
        name = "analyze",
        about = "Parse a routine description and report per-block liveness"
    )]
    Analyze {
        #[structopt(help = "Routine file to analyze")]
        routine: PathBuf,

        #[structopt(short = "o", long, help = "Write the report here instead of stdout")]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let opts = Options::from_args();

    let mut logger = env_logger::Builder::from_default_env();
    if opts.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    let _ = logger.try_init();

    match opts.command {
        Command::Analyze { routine, output } => {
            let text = std::fs::read_to_string(&routine)?;
            let routine = frontend::parse_routine(&text)?;
            let cfg = CFGInfo::new(&routine);
            debug!(
                "parsed {} blocks ({} exits), {} vars",
                routine.blocks.len(),
                cfg.exit_blocks.len(),
                routine.vars.len()
            );
            let local = LocalSets::compute(&routine);
            let liveness = Liveness::compute(&routine, &local);
            match output {
                Some(path) => {
                    let mut file = std::fs::File::create(path)?;
                    report::write_report(&routine, &local, &liveness, &mut file)?;
                }
                None => {
                    let stdout = std::io::stdout();
                    let mut lock = stdout.lock();
                    report::write_report(&routine, &local, &liveness, &mut lock)?;
                }
            }
        }
    }

    Ok(())
}
