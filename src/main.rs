use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use lectern::{Config, FsSource, Session, log, render_error, render_page, render_view};

#[derive(Parser)]
#[command(name = "lectern")]
#[command(about = "Render markdown lecture notes to HTML")]
struct Cli {
    /// Catalog file (falls back to the bundled catalog if missing)
    #[arg(short = 'C', long, default_value = "lectern.toml", global = true)]
    config: PathBuf,

    /// Print debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single markdown file to an HTML fragment
    Convert {
        /// Input Markdown file
        input: PathBuf,

        /// Output HTML file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the lectures in the catalog
    List,

    /// Render one lecture with its header
    Render {
        /// Lecture id from the catalog
        id: u32,

        /// Output HTML file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render every lecture into a directory
    Build {
        /// Output directory
        #[arg(short, long, default_value = "public")]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    lectern::logger::set_verbose(cli.verbose);

    if let Err(e) = run(cli) {
        log!("error"; "{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert { input, output } => {
            let markdown = fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            write_output(output.as_deref(), &lectern::parse(&markdown))
        }
        Commands::List => {
            let config = load_config(&cli.config)?;
            for lecture in &config.lectures {
                println!(
                    "{:>4}  {}  ({}, {})",
                    lecture.id, lecture.title, lecture.file, lecture.pdf
                );
            }
            Ok(())
        }
        Commands::Render { id, output } => {
            let mut session = open_session(load_config(&cli.config)?);
            let (body, result) = match session.open(id) {
                Ok(view) => (render_view(&view), Ok(())),
                Err(e) => (render_error(), Err(e)),
            };
            let page = render_page(session.config(), session.current(), &body);
            write_output(output.as_deref(), &page)?;
            result.context("lecture could not be rendered")
        }
        Commands::Build { output } => build(load_config(&cli.config)?, &output),
    }
}

fn load_config(path: &Path) -> Result<Config> {
    Config::load_or_default(path).with_context(|| format!("failed to load {}", path.display()))
}

fn open_session(config: Config) -> Session<FsSource> {
    let source = FsSource::new(&config.site.content_dir);
    Session::new(config, source)
}

fn build(config: Config, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let ids: Vec<u32> = config.ids().collect();
    let mut session = open_session(config);
    let mut failed = 0;

    for id in ids {
        let path = out_dir.join(format!("lecture-{id}.html"));
        let body = match session.open(id) {
            Ok(view) => render_view(&view),
            Err(e) => {
                log!("error"; "{}", e);
                failed += 1;
                render_error()
            }
        };
        let html = render_page(session.config(), Some(id), &body);
        fs::write(&path, html).with_context(|| format!("failed to write {}", path.display()))?;
        log!("build"; "wrote {}", path.display());
    }

    if failed > 0 {
        bail!("{failed} lecture(s) could not be loaded");
    }
    Ok(())
}

fn write_output(output: Option<&Path>, html: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log!("render"; "created {}", path.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}
