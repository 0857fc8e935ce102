use anyhow::Result;
/// CareerLens CLI - terminal viewer for career assessment results
///
/// Provides TUI, show, and export commands over an assessment document.
use careerlens_cli::{export, report, ui};
use careerlens_core::loader;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "careerlens-cli")]
#[command(about = "CareerLens - career assessment results in the terminal", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive results viewer
    Tui {
        /// Path to the assessment document (JSON or YAML)
        #[arg(short, long, default_value = "assessment.json")]
        file: PathBuf,
        /// Start in high-contrast mode
        #[arg(long)]
        high_contrast: bool,
    },
    /// Print one or all result sections as plain text (non-interactive)
    Show {
        /// Path to the assessment document (JSON or YAML)
        #[arg(short, long, default_value = "assessment.json")]
        file: PathBuf,
        /// Section to print
        #[arg(short, long, value_enum, default_value_t = report::Section::All)]
        section: report::Section,
        /// Output width in columns
        #[arg(short, long, default_value_t = 80)]
        width: u16,
    },
    /// Export action items as CSV or the whole result as JSON
    Export {
        /// Path to the assessment document (JSON or YAML)
        #[arg(short, long, default_value = "assessment.json")]
        file: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = export::ExportFormat::Csv)]
        format: export::ExportFormat,
        /// Output file
        #[arg(short, long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));
    let cli = Cli::parse();

    match cli.command {
        Commands::Tui {
            file,
            high_contrast,
        } => {
            ui::run_tui(&file, high_contrast)?;
        }
        Commands::Show {
            file,
            section,
            width,
        } => {
            let result = loader::load_assessment(&file)?;
            print!("{}", report::render_section(&result, section, width));
        }
        Commands::Export { file, format, out } => {
            let result = loader::load_assessment(&file)?;
            export::export_to_file(&result, format, &out)?;
            println!("Exported to {}", out.display());
        }
    }

    Ok(())
}
