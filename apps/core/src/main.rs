// clogen - Course Learning Outcome generator
// Entry point: configuration, logging and command dispatch

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};

use clogen_core::config::AppConfig;
use clogen_core::export::{self, export_base_name};
use clogen_core::logging::init_tracing;
use clogen_core::models::{CourseRequest, InteractiveRequest, DEFAULT_NUM_CLOS, DEFAULT_NUM_SKILLS};
use clogen_core::nlp::{CourseAnalyzer, CourseReport};
use clogen_core::render::render_report;
use clogen_core::text_extract;

#[derive(Parser)]
#[command(name = "clogen", version)]
#[command(about = "Generate Course Learning Outcomes and skill sets from course content", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a course document (.pdf, .docx, .txt)
    Generate {
        /// Path to the document file
        file_path: PathBuf,

        /// Directory to save the output (defaults to CLOGEN_OUTPUT_DIR or ./output)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Number of CLOs to generate
        #[arg(short = 'c', long, default_value_t = DEFAULT_NUM_CLOS)]
        clos: usize,

        /// Number of skills to extract
        #[arg(short = 's', long, default_value_t = DEFAULT_NUM_SKILLS)]
        skills: usize,

        /// Course title used to name CSV exports
        #[arg(long, default_value = "")]
        title: String,

        /// Seed for reproducible verb, template and domain selection
        #[arg(long)]
        seed: Option<u64>,

        /// Also export CSV tables
        #[arg(long)]
        csv: bool,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Analyze course content given inline or on stdin
    Analyze {
        /// Course title
        #[arg(long, default_value = "")]
        title: String,

        /// Course content (read from stdin when omitted)
        #[arg(long)]
        content: Option<String>,

        /// Number of CLOs to generate (3-10)
        #[arg(long, default_value_t = DEFAULT_NUM_CLOS)]
        clos: usize,

        /// Number of skills to extract (5-15)
        #[arg(long, default_value_t = DEFAULT_NUM_SKILLS)]
        skills: usize,

        /// Seed for reproducible verb, template and domain selection
        #[arg(long)]
        seed: Option<u64>,

        /// Export CSV tables to the output directory
        #[arg(long)]
        export: bool,

        /// Directory to save exports (defaults to CLOGEN_OUTPUT_DIR or ./output)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn print_report(report: &CourseReport, json: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", render_report(report));
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(config.log_format)?;
    debug!("Configuration: {:?}", config);

    // Stopword resources are loaded once; failure aborts startup
    let analyzer =
        CourseAnalyzer::from_config(&config).context("Failed to load language resources")?;

    match cli.command {
        Commands::Generate {
            file_path,
            output,
            clos,
            skills,
            title,
            seed,
            csv,
            json,
        } => {
            info!("Processing document: {}", file_path.display());
            let text = text_extract::extract_text_from_file(&file_path)
                .with_context(|| format!("Failed to read {}", file_path.display()))?;

            let request = CourseRequest::new(title, text).with_counts(clos, skills);
            let mut rng = make_rng(seed.or(config.seed));
            let report = analyzer.analyze(&request, &mut rng);
            print_report(&report, json)?;

            let output_dir = output.unwrap_or(config.output_dir);
            let written = export::write_text_summary(&report, &output_dir)?;
            info!(
                "Wrote {} and {}",
                written.clos_path.display(),
                written.skills_path.display()
            );

            if csv {
                let base = export_base_name(&report.title, Utc::now());
                export::export_csv(&report, &output_dir, &base)?;
            }
            eprintln!("\nResults saved to {}", output_dir.display());
        }

        Commands::Analyze {
            title,
            content,
            clos,
            skills,
            seed,
            export: export_tables,
            output,
            json,
        } => {
            let content = match content {
                Some(content) => content,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read course content from stdin")?;
                    buf
                }
            };

            let request: CourseRequest =
                InteractiveRequest::new(&title, &content, clos, skills)?.into();
            let mut rng = make_rng(seed.or(config.seed));
            let report = analyzer.analyze(&request, &mut rng);
            print_report(&report, json)?;

            if export_tables {
                let output_dir = output.unwrap_or(config.output_dir);
                let base = export_base_name(&report.title, Utc::now());
                let written = export::export_csv(&report, &output_dir, &base)?;
                eprintln!(
                    "Results exported to {} and {}",
                    written.clos_path.display(),
                    written.skills_path.display()
                );
            }
        }
    }

    Ok(())
}
