use clap::Parser;
use reltype::{
    fs::{TypeExport, load_names_from_lines},
    sets::RelTypeSet,
    statistics::MergeStats,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Merge and deduplicate relationship-type exports
#[derive(Parser, Debug)]
#[command(name = "reltype")]
#[command(about = "Merge relationship type exports from property graph tooling", long_about = None)]
struct Args {
    /// Paths of the export files to merge (comma-separated list, e.g., "a.json,b.json")
    #[arg(short, long, value_delimiter = ',', required = true)]
    input: Vec<String>,

    /// Input format: "json" for export documents, "lines" for one name per line
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Print the merged type names in sorted order
    #[arg(short, long)]
    list: bool,

    /// Print the merged set as a JSON array of names
    #[arg(long)]
    json: bool,
}

fn merge_names(set: &mut RelTypeSet, names: &[String], stats: &mut MergeStats) {
    for name in names {
        if set.insert(name.as_str()) {
            stats.bump_added();
        } else {
            stats.bump_duplicate();
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut merged = RelTypeSet::new();
    let mut combined_stats = MergeStats::new();

    for path in &args.input {
        let names = match args.format.as_str() {
            "json" => TypeExport::load_from_json(path).map(|export| export.relationship_types),
            "lines" => load_names_from_lines(path),
            other => {
                eprintln!("Unknown format {other}, expected json or lines");
                std::process::exit(2);
            }
        };

        let names = match names {
            Ok(names) => names,
            Err(err) => {
                eprintln!("Failed to load {path}: {err}");
                std::process::exit(1);
            }
        };

        info!(path = %path, count = names.len(), "merging export");

        let mut file_stats = MergeStats::new();
        merge_names(&mut merged, &names, &mut file_stats);
        file_stats.bump_file_loaded();

        combined_stats = combined_stats.merge(&file_stats);
    }

    println!(
        "Merged {} files: {} types, {} duplicates skipped",
        combined_stats.get_files_loaded(),
        combined_stats.get_types_added(),
        combined_stats.get_duplicates_skipped()
    );

    if args.list {
        for name in merged.sorted_names() {
            println!("{name}");
        }
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string(&merged.sorted_names()).expect("string arrays serialize")
        );
    }
}
