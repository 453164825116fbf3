//! Command-line arguments.

use std::path::Path;

use clap::Parser;
use h5show_io::{IndexConfig, Layout};

/// Scroll through HDF5 detector frames, loading one frame at a time.
#[derive(Parser, Debug)]
#[command(name = "h5show")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    layout: Layout,
}

impl Args {
    pub fn file(&self) -> &Path {
        self.layout.file()
    }

    pub fn index_config(&self) -> IndexConfig {
        self.layout.index_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_stack_with_dataset() {
        let args = Args::parse_from([
            "h5show",
            "stack",
            "-f",
            "scan-0323_pilatus.h5",
            "--dataset",
            "entry/data/data",
        ]);
        assert_eq!(args.file(), Path::new("scan-0323_pilatus.h5"));
        assert_eq!(
            args.index_config(),
            IndexConfig::Stack {
                dataset: "entry/data/data".to_string()
            }
        );
    }

    #[test]
    fn test_file_is_required() {
        assert!(Args::try_parse_from(["h5show", "stack"]).is_err());
    }
}
