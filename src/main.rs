use clap::{Args as ClapArgs, Parser, Subcommand};
use flixdash::charts::ChartPanel;
use flixdash::{report, Catalog, ContentType, Dashboard, FilterControls};
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

const DEFAULT_DATA_PATH: &str = "netflix_titles.csv";

#[derive(Parser, Debug)]
#[command(name = "flixdash")]
#[command(author, version, about = "Interactive analytics dashboard for the Netflix title catalog")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(ClapArgs, Debug)]
struct DataArgs {
    /// Catalog CSV (default: netflix_titles.csv)
    #[arg(env = "FLIXDASH_DATA")]
    path: Option<PathBuf>,

    /// Pick the catalog with a file dialog
    #[arg(long)]
    gui: bool,
}

#[derive(ClapArgs, Debug)]
struct FilterArgs {
    /// Content type to include (repeatable; default: all)
    #[arg(long = "type", value_name = "TYPE")]
    types: Vec<ContentType>,

    /// First release year (default: 2010, clamped to the catalog)
    #[arg(long)]
    from: Option<i32>,

    /// Last release year (default: 2021, clamped to the catalog)
    #[arg(long)]
    to: Option<i32>,
}

impl FilterArgs {
    fn controls(&self, catalog: &Catalog) -> FilterControls {
        let mut controls = FilterControls::defaults(catalog);
        if !self.types.is_empty() {
            controls.types = self.types.clone();
        }
        let (min, max) = controls.year_range;
        controls.with_year_range(self.from.unwrap_or(min), self.to.unwrap_or(max))
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive dashboard in the browser
    Serve {
        #[command(flatten)]
        data: DataArgs,

        /// Port to listen on
        #[arg(short, long, default_value = "3001")]
        port: u16,

        /// Don't open the browser
        #[arg(long)]
        no_open: bool,
    },

    /// Write a snapshot of the dashboard (.html, .json, or .csv)
    Report {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// Search for a title or director
        #[arg(short, long, default_value = "")]
        search: String,

        /// Output file; the extension picks the format
        #[arg(short, long)]
        output: PathBuf,

        /// Open the report when done
        #[arg(long = "open")]
        open_report: bool,
    },

    /// Print metrics and rankings to the terminal
    Summary {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args.command) {
        eprintln!("\x1b[31mError:\x1b[0m {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> flixdash::Result<()> {
    match command {
        Command::Serve { data, port, no_open } => {
            let catalog = Arc::new(load(&data)?);
            flixdash::serve::start(port, catalog, !no_open)
        }

        Command::Report { data, filters, search, output, open_report } => {
            let catalog = load(&data)?;
            let view = Dashboard::build(&catalog, &filters.controls(&catalog), &search);
            report::generate(&output, &view)?;
            eprintln!("\x1b[32mReport saved: {}\x1b[0m", output.display());

            if open_report {
                if let Err(e) = open::that(&output) {
                    eprintln!("Failed to open report: {}", e);
                }
            }
            Ok(())
        }

        Command::Summary { data, filters } => {
            let catalog = load(&data)?;
            let view = Dashboard::build(&catalog, &filters.controls(&catalog), "");
            print_summary(&view);
            Ok(())
        }
    }
}

fn load(data: &DataArgs) -> flixdash::Result<Catalog> {
    let path = resolve_path(data);
    info!("reading {}", path.display());
    Catalog::load(path)
}

#[cfg(feature = "gui")]
fn resolve_path(data: &DataArgs) -> PathBuf {
    if data.gui {
        if let Some(picked) = pick_csv_gui() {
            return picked;
        }
        eprintln!("No file selected, falling back to {}", DEFAULT_DATA_PATH);
    }
    data.path.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
}

#[cfg(not(feature = "gui"))]
fn resolve_path(data: &DataArgs) -> PathBuf {
    if data.gui {
        eprintln!("Note: GUI mode not available in this build.");
    }
    data.path.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
}

#[cfg(feature = "gui")]
fn pick_csv_gui() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select the title catalog CSV")
        .add_filter("CSV files", &["csv"])
        .pick_file()
}

fn print_summary(view: &flixdash::DashboardView) {
    let (min, max) = view.controls.year_range;
    let types: Vec<&str> = view.controls.types.iter().map(|t| t.as_str()).collect();

    eprintln!("\x1b[1mNetflix Content Analysis\x1b[0m");
    eprintln!("{}", "─".repeat(60));
    eprintln!("Types: {}   Release years: {}–{}\n", types.join(", "), min, max);

    println!("  \x1b[1mTotal Titles:\x1b[0m {:>6}", view.metrics.total);
    println!("  \x1b[31mMovies:\x1b[0m       {:>6}", view.metrics.movies);
    println!("  \x1b[34mTV Shows:\x1b[0m     {:>6}", view.metrics.tv_shows);

    // Genres come smallest-first for the bar chart; print them largest-first
    let mut genres = view.charts.top_genres.clone();
    genres.points.reverse();

    print_ranking(&genres);
    print_ranking(&view.charts.top_countries);
    print_ranking(&view.charts.growth);
}

fn print_ranking(panel: &ChartPanel) {
    println!("\n\x1b[1m{}\x1b[0m", panel.title);
    if panel.is_empty() {
        println!("  (no data)");
        return;
    }

    let max = panel.points.iter().map(|p| p.value).max().unwrap_or(1).max(1);
    for p in &panel.points {
        let bar = "█".repeat((p.value * 30).div_ceil(max));
        println!("  {:<32} {:>6}  {}", truncate(&p.label, 32), p.value, bar);
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
