use clap::{error::ErrorKind, Parser};
use filecraft::config::USAGE;
use filecraft::core::{ConfigProvider, OperationRunner};
use filecraft::utils::{logger, validation::Validate};
use filecraft::{FileOperations, LocalStorage, Operation, Outcome, PatchArgs, ToolConfig};

const TAG: &str = "[filecraft]";
const PREFIX: &str = "[filecraft] ";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = match PatchArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            print_usage(&e.to_string());
            return Ok(());
        }
    };

    let config = match ToolConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => e.exit_with_report(PREFIX),
    };
    if let Err(e) = config.validate() {
        e.exit_with_report(PREFIX);
    }

    logger::init_cli_logger(args.verbose, Some(config.log_level()));
    tracing::debug!(argv = ?std::env::args().collect::<Vec<_>>(), "arguments");

    let operation = match args.operation() {
        Ok(operation) => operation,
        Err(e) => {
            print_usage(&e.to_string());
            return Ok(());
        }
    };

    if let Operation::FullReplace { path, .. } = &operation {
        println!("{} Writing entire content to: {}", TAG, path.display());
    }

    let operations = FileOperations::new(LocalStorage::from_config(&config));

    match operations.execute(operation).await {
        Ok(Outcome::Written { bytes, .. }) => {
            tracing::info!(bytes, "full content replaced");
            println!("{} ✅ Full content replaced.", TAG);
        }
        Ok(Outcome::Replaced { occurrences, .. }) => {
            tracing::info!(occurrences, "replacement done");
            println!("{} ✅ Replacement done.", TAG);
        }
        Ok(Outcome::NotFound { path }) => {
            println!("{} ❌ File not found: {}", TAG, path.display());
        }
        Err(e) => e.exit_with_report(PREFIX),
    }

    Ok(())
}

fn print_usage(reason: &str) {
    println!("{} ❌ Invalid arguments.", TAG);
    if let Some(first_line) = reason.lines().next() {
        println!("{} {}", TAG, first_line);
    }
    println!("{}", USAGE);
}
