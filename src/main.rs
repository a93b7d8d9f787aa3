use chrono::Local;
use clap::Parser;
use refutelib::{
    problem::{Problem, ProblemError, write_verdicts},
    resolution::ResourceLimitConfig,
};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Answer queries against a first-order knowledge base by resolution refutation
#[derive(Parser)]
struct Cli {
    /// Path to the problem file
    #[arg(default_value = "input.txt")]
    input: PathBuf,
    /// Where to write one TRUE/FALSE line per query
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,
    /// Time budget per query in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
    /// Resident memory limit in MiB
    #[arg(long)]
    memory_limit: Option<usize>,
}

fn run(args: &Cli) -> Result<(), ProblemError> {
    log::info!("Parse file: {:?}", args.input);
    let problem = Problem::read(&args.input)?;
    let config = ResourceLimitConfig::from_secs_and_mib(args.timeout, args.memory_limit);
    let results = problem.solve(&config);
    write_verdicts(&args.output, &results)?;
    log::info!("Wrote {} verdicts to {:?}", results.len(), args.output);
    Ok(())
}

fn main() -> ExitCode {
    let args = Cli::parse();
    env_logger::builder()
        .format(|buf, record| {
            let level_style = buf.default_level_style(record.level()).bold();
            writeln!(
                buf,
                "{}|{level_style}{:7}{level_style:#}|{:10}| {}",
                Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
