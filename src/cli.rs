use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the target corpus (.txt files)
    pub target_dir: PathBuf,

    /// Output file path
    #[arg(default_value = "output.json", short)]
    pub output_file: PathBuf,

    /// Directory containing an optional reference corpus
    #[arg(short, long)]
    pub reference: Option<PathBuf>,

    /// Assign categories from filename prefixes (e.g. "acad_01.txt" -> "acad")
    #[arg(long)]
    pub categories: bool,

    /// YAML discourse lexicon replacing the embedded one
    #[arg(long)]
    pub lexicon: Option<PathBuf>,

    /// Also write pos_frequencies.csv and ds_frequencies.csv to this directory
    #[arg(long)]
    pub csv_dir: Option<PathBuf>,

    /// Maximum recursion depth (0 means no recursion)
    #[arg(short, long, default_value = "0")]
    pub max_depth: usize,

    /// Exclude patterns (glob patterns like "*.tmp" or "drafts")
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tagfreq", "corpus"]).unwrap();
        assert_eq!(cli.target_dir, PathBuf::from("corpus"));
        assert_eq!(cli.output_file, PathBuf::from("output.json"));
        assert_eq!(cli.max_depth, 0);
        assert!(!cli.categories);
        assert!(cli.reference.is_none());
        assert!(cli.exclude.is_empty());
    }

    #[test]
    fn test_all_options() {
        let cli = Cli::try_parse_from([
            "tagfreq",
            "corpus",
            "-o",
            "report.json",
            "-r",
            "reference",
            "--categories",
            "--lexicon",
            "lexicon.yaml",
            "--csv-dir",
            "tables",
            "-m",
            "2",
            "-e",
            "*.bak,drafts",
        ])
        .unwrap();
        assert_eq!(cli.output_file, PathBuf::from("report.json"));
        assert_eq!(cli.reference, Some(PathBuf::from("reference")));
        assert!(cli.categories);
        assert_eq!(cli.lexicon, Some(PathBuf::from("lexicon.yaml")));
        assert_eq!(cli.csv_dir, Some(PathBuf::from("tables")));
        assert_eq!(cli.max_depth, 2);
        assert_eq!(cli.exclude, vec!["*.bak", "drafts"]);
    }

    #[test]
    fn test_target_required() {
        assert!(Cli::try_parse_from(["tagfreq"]).is_err());
    }
}
