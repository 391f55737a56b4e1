//! CLI entrypoint.

use std::fs::File;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use peekdoc::analyzer::DocAnalyzer;
use peekdoc::render::Renderer;
use peekdoc::resolver::Resolver;
use peekdoc::viewer::App;

#[derive(Parser)]
#[command(name = "peekdoc", version, about = "Terminal viewer for API documentation")]
struct Cli {
	/// Include private items
	#[arg(short = 'p', long, default_value_t = false)]
	private: bool,

	/// Enable offline mode, ensuring Cargo will not use the network
	#[arg(short = 'o', long, default_value_t = false)]
	offline: bool,

	/// Disable the rustdoc JSON disk cache
	#[arg(long, default_value_t = false)]
	no_cache: bool,

	/// Start with the light color palette
	#[arg(long, default_value_t = false)]
	light: bool,

	/// Directory containing the Cargo project to document
	#[arg(short = 'd', long)]
	dir: Option<PathBuf>,

	/// Append log output to a file instead of discarding it
	#[arg(long)]
	log_file: Option<PathBuf>,
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.log_file.as_deref());

	let mut analyzer = DocAnalyzer::new()
		.with_offline(cli.offline)
		.with_private_items(cli.private)
		.with_cache(!cli.no_cache);
	if let Some(dir) = cli.dir {
		analyzer = analyzer.with_manifest_dir(dir);
	}

	let resolver = Resolver::new(analyzer, Renderer);
	let mut app = App::new(resolver, !cli.light);
	if let Err(err) = app.run() {
		eprintln!("error: {err}");
		process::exit(1);
	}
}

/// Route log records to a file, never to the terminal the UI owns.
fn init_logging(log_file: Option<&std::path::Path>) {
	let mut builder = env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or("info"),
	);
	match log_file.map(File::create) {
		Some(Ok(file)) => {
			builder.target(env_logger::Target::Pipe(Box::new(file)));
		}
		Some(Err(err)) => {
			eprintln!("warning: couldn't open log file: {err}");
			builder.filter_level(log::LevelFilter::Off);
		}
		None => {
			builder.filter_level(log::LevelFilter::Off);
		}
	}
	builder.init();
}
