use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use til_site::{config, output, site};

#[derive(Parser)]
#[command(name = "til-site")]
#[command(about = "Validate and export the navigation of a Today I Learned site")]
#[command(long_about = "\
Validate and export the navigation of a Today I Learned site

The docs directory holds config.toml and the notes. Each [[sidebar]] table
is a category; its `children` list the notes in display order. Categories
without `children` list every note in the directory of the same name.

  docs/
  ├── config.toml              # title, description, base, nav, sidebar
  ├── README.md                # Home page
  ├── Typescript/
  │   └── symbol.md
  └── Book/                    # Listed: README.md, then NNN- order, then name
      ├── 010-book1.md
      └── 020-book2.md

Every sidebar entry must name exactly one note. Any configuration error
aborts with the category and entry involved.

Run 'til-site gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Docs directory (holds config.toml)
    #[arg(long, default_value = "docs", global = true)]
    source: PathBuf,

    /// Output directory for site.json
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate config and sidebar entries without writing anything
    Check,
    /// Validate, then write site.json for the site generator
    Manifest,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site = site::load_site(&cli.source)?;
            output::print_site(&site);
            println!("==> Configuration is valid");
        }
        Command::Manifest => {
            println!("==> Loading {}", cli.source.display());
            let site = site::load_site(&cli.source)?;
            output::print_site(&site);
            let path = site::write_manifest(&site.manifest, &cli.output)?;
            println!("==> Wrote {}", path.display());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
