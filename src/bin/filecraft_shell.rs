use clap::Parser;
use filecraft::core::ConfigProvider;
use filecraft::utils::{logger, validation::Validate};
use filecraft::{DevShell, FileOperations, LocalStorage, ToolConfig};
use tokio::io::BufReader;

#[derive(Parser)]
#[command(name = "filecraft-shell")]
#[command(about = "Create files from `create_file <path>|<content>` lines read on stdin")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Directory that relative paths are resolved against (overrides config)
    #[arg(long)]
    base_dir: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match ToolConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => e.exit_with_report(""),
    };

    if let Some(base_dir) = args.base_dir {
        config.paths.base_dir = base_dir;
    }

    if let Err(e) = config.validate() {
        e.exit_with_report("");
    }

    logger::init_cli_logger(args.verbose, Some(config.log_level()));
    tracing::debug!(base_dir = %config.paths.base_dir, "starting filecraft shell");

    let storage = LocalStorage::from_config(&config);
    let shell = DevShell::from_config(FileOperations::new(storage), &config);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let summary = shell.run(stdin, &mut stdout).await?;

    tracing::debug!(?summary, "session finished");
    Ok(())
}
