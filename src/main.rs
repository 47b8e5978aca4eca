use anyhow::Result;
use clap::Parser;
use hexlens::cli::{run, CliArgs};
use hexlens::logging::init_tracing;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let output = run(&args)?;
    println!("{}", output);
    Ok(())
}
