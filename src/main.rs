// src/main.rs

use pcmd::{cli, logging, run};

#[tokio::main]
async fn main() {
    if let Err(err) = run_main().await {
        eprintln!("pcmd error: {err:?}");
        std::process::exit(1);
    }
}

async fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    // Individual command failures are already on the console; they don't
    // change the exit status.
    let _summary = run(args).await?;
    Ok(())
}
