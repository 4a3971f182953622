#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use std::path::PathBuf;

use clap::{Args, Parser};

use unlock_vba::error::{UnlockError, UnlockResult};
use unlock_vba::{select, unlock};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    selection: Selection,

    /// Modify the files in-place, if not selected a new file will be generated and saved
    /// alongside the original
    #[arg(short, long, default_value_t = false)]
    inplace: bool,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct Selection {
    /// Files to unlock <file1 file2 ...>
    #[arg(short, long, num_args = 1..)]
    files: Option<Vec<PathBuf>>,

    /// Unlock every file in the current directory with one of these extensions
    /// <xlsm .mdb accdb ...> (with or without the .)
    #[arg(short, long, num_args = 1..)]
    extensions: Option<Vec<String>>,

    /// Unlock every file in the current directory whose name matches this regex
    #[arg(short, long)]
    regex: Option<String>,
}

impl Selection {
    fn file_list(&self) -> UnlockResult<Vec<PathBuf>> {
        let dir = std::env::current_dir()?;
        match (&self.files, &self.extensions, &self.regex) {
            (Some(files), _, _) => Ok(files.clone()),
            (_, Some(extensions), _) => select::by_extension(&dir, extensions),
            (_, _, Some(pattern)) => select::by_regex(&dir, pattern),
            _ => unreachable!("clap enforces exactly one selection mode"),
        }
    }
}

fn main() -> UnlockResult<()> {
    env_logger::init();
    let cli = Cli::parse();

    let file_list = cli.selection.file_list()?;
    if file_list.is_empty() {
        return Err(UnlockError::NoMatchingFiles);
    }

    let mut succeeded = Vec::new();
    let mut failed = Vec::new();
    for filename in file_list {
        match unlock::unlock_one(&filename, cli.inplace) {
            Ok(_) => succeeded.push(filename),
            Err(e) => {
                log::error!("{}: {e}", filename.display());
                failed.push((filename, e));
            }
        }
    }

    if !succeeded.is_empty() {
        println!("--- Unlocked:");
        for filename in &succeeded {
            println!("-\t{}", filename.display());
        }
    }
    if !failed.is_empty() {
        println!("--- Failed:");
        for (filename, e) in &failed {
            println!("-\t{}: {e}", filename.display());
        }
    }

    Ok(())
}
