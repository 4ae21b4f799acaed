mod cli;
mod config;

use cli::Args;
use config::Settings;
use failing_assets::adapters::outbound::console::StderrProgressReporter;
use failing_assets::adapters::outbound::network::DagsterGraphQlClient;
use failing_assets::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use failing_assets::application::use_cases::{BatchedStatusLoader, ReportFailingAssetsUseCase};
use failing_assets::shared::error::ExitCode;
use failing_assets::shared::Result;
use std::io::IsTerminal;
use std::process;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here, on stdout
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = config::load_for_args(&args)?;
    let settings = Settings::resolve(&args, config)?;

    // Create adapters (Dependency Injection)
    let repository = DagsterGraphQlClient::new(&settings.endpoint, settings.timeout)?;
    let progress_reporter = StderrProgressReporter::new();

    let loader = BatchedStatusLoader::new(repository, progress_reporter)
        .with_batch_size(settings.batch_size)?
        .with_max_attempts(settings.max_attempts)?;
    let mut use_case =
        ReportFailingAssetsUseCase::new(loader).with_ui_base_url(settings.ui_base_url.clone());

    let report = use_case.execute().await?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));

    let colored = settings.output.is_none() && std::io::stdout().is_terminal();
    let formatter = FormatterFactory::create(settings.format, colored);
    let formatted_output = formatter.format(&report)?;

    let presenter_type = match settings.output {
        Some(path) => PresenterType::File(path),
        None => PresenterType::Stdout,
    };
    PresenterFactory::create(presenter_type).present(&formatted_output)?;

    Ok(exit_code_for(settings.fail_on_failing, report.has_failing_assets()))
}

fn exit_code_for(fail_on_failing: bool, has_failing_assets: bool) -> ExitCode {
    if fail_on_failing && has_failing_assets {
        ExitCode::FailingAssetsDetected
    } else {
        ExitCode::Success
    }
}
