use clap::{Parser, Subcommand};
use folio::{config, content, generate, logging, output, serve, site::Site};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Static site generator for a personal portfolio")]
#[command(long_about = "\
Static site generator for a personal portfolio

One TOML file describes the whole site: profile text, navigation, work
history, social links, and an optional timeline. Every page is rendered to
plain HTML; a small script adds client-side navigation between them.

Content structure:

  content/
  ├── site.toml                    # Site content (built-in sample if missing)
  ├── config.toml                  # Presentation config (optional, sparse)
  └── assets/                      # Copied to the output root (images, favicon)

Routes:
  /          Home: profile, social links, optional timeline
  /work      Work history cards
  /blogs     Blog placeholder
  /contact   Email link (address stays obfuscated in the HTML)

Run 'folio gen-content' for a documented site.toml and
'folio gen-config' for a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page into the output directory
    Build,
    /// Validate content and config without writing anything
    Check,
    /// Serve the site locally, rendering pages on demand
    Serve {
        /// Port to listen on
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print a stock site.toml with all content documented
    GenContent,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            logging::init_logging();
            println!("==> Building {}", cli.source.display());
            let report = generate::generate(&cli.source, &cli.output)?;
            output::print_generate_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            logging::init_logging();
            println!("==> Checking {}", cli.source.display());
            let site = Site::load(&cli.source)?;
            output::print_check_output(&site);
            println!("==> Content is valid");
        }
        Command::Serve { port } => {
            logging::init_logging();
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(serve::serve(&cli.source, port))?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenContent => {
            print!("{}", content::stock_content_toml());
        }
    }

    Ok(())
}
