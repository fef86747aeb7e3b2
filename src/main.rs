use anyhow::Context;
use clap::Parser;
use serp_pixelrank::config::{CliConfig, FileConfig, Flow, Settings};
use serp_pixelrank::core::{keywords, report::RankReport};
use serp_pixelrank::utils::{logger, validation::Validate};
use serp_pixelrank::{RestClient, SerpAnalysis};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting serp-pixelrank");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let file_config = match &cli.config {
        Some(path) => Some(
            FileConfig::from_file(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?,
        ),
        None => None,
    };

    let keyword_list = match keywords::collect(&cli.keywords, cli.keywords_file.as_deref()) {
        Ok(list) => list,
        Err(e) => {
            tracing::error!("Could not assemble keyword list: {}", e);
            eprintln!("⚠️ {}", e.user_message());
            std::process::exit(1);
        }
    };

    let settings = Settings::resolve(&cli, file_config.as_ref(), keyword_list);

    // Rejected submissions never reach the network.
    if let Err(e) = settings.validate() {
        tracing::warn!("Submission rejected: {}", e);
        eprintln!("⚠️ {}", e.user_message());
        std::process::exit(1);
    }

    let client = RestClient::new(&settings.host, &settings.username, &settings.password)?;
    let analysis = SerpAnalysis::new(client);
    let request = settings.request();

    let outcome = match &cli.command {
        Flow::General => analysis.run_general(&request).await,
        Flow::Domain { target } => analysis.run_for_domain(&request, target).await,
    };

    // One attempt only: a failed request is reported and the submission
    // ends with an empty result set.
    let rows = match outcome {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("SERP request failed: {}", e);
            eprintln!("❌ {}", e.user_message());
            Vec::new()
        }
    };

    let report = RankReport::new(rows);

    if report.is_empty() {
        println!("No results.");
    } else {
        print!("{}", report.render());
        tracing::info!("✅ Analyzed {} keyword(s)", report.len());
    }

    if let Some(output) = &cli.output {
        let path = if output.extension().is_some() {
            output.clone()
        } else {
            output.join(report.default_filename())
        };
        report.write_csv(&path)?;
        println!("📁 Results saved to: {}", path.display());
    }

    Ok(())
}
