use depviz::adapters::{
    FileSystemSource, HttpPayloadSource, StderrProgressReporter, VisDecorator,
};
use depviz::application::BuildDatasetUseCase;
use depviz::cli::{Args, OutputFormat};
use depviz::dataset::Dataset;
use depviz::ports::PayloadSource;
use depviz::shared::{ExitCode, Result};
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let dataset = match &args.origin {
        Some(origin) => build(HttpPayloadSource::new(origin.clone())?).await?,
        None => {
            let payload_path = args
                .payload
                .clone()
                .ok_or_else(|| anyhow::anyhow!("either --payload or --origin is required"))?;
            build(FileSystemSource::new(payload_path, args.flags.clone())).await?
        }
    };

    eprintln!("{}", args.format.progress_message());
    let output = match args.format {
        OutputFormat::Graph => serde_json::to_string_pretty(&dataset.materialize())?,
        OutputFormat::Stats => serde_json::to_string_pretty(&stats_view(&dataset))?,
    };
    println!("{}", output);

    Ok(())
}

async fn build<S: PayloadSource>(source: S) -> Result<Dataset> {
    let use_case =
        BuildDatasetUseCase::new(source, VisDecorator::new(), StderrProgressReporter::new());
    use_case.execute().await
}

fn stats_view(dataset: &Dataset) -> serde_json::Value {
    serde_json::json!({
        "dependenciesCount": dataset.dependencies_count,
        "size": dataset.size,
        "indirectDependencies": dataset.indirect_dependencies,
        "extensions": dataset.counters.extensions(),
        "licenses": dataset.counters.licenses(),
        "authors": dataset.counters.authors(),
        "packages": &dataset.packages,
        "warnings": &dataset.warnings,
    })
}
