use anyhow::{bail, ensure, Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use conllu_correct::conllu::corrector::correct_document;

static CONLLU_SUFFIX: &str = ".conllu";
static UPDATED_SUFFIX: &str = "_updated";

struct Args {
    input_path: String,
}

fn get_args() -> Result<Args> {
    let args: Vec<String> = env::args().skip(1).collect();

    let opts = getopts::Options::new();

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    let input_path = matches
        .free
        .get(0)
        .context("path to a folder of .conllu files is required")?
        .clone();

    Ok(Args { input_path })
}

fn main() -> Result<()> {
    let args = get_args()?;

    let input_path = PathBuf::from(&args.input_path);
    ensure!(
        input_path.is_dir(),
        "Folder not found: {}",
        input_path.display()
    );

    let mut conllu_paths = Vec::new();
    for entry in fs::read_dir(&input_path)
        .with_context(|| format!("Failed to read folder: {}", input_path.display()))?
    {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
        if !file_name.ends_with(CONLLU_SUFFIX) {
            continue;
        }

        conllu_paths.push(path);
    }
    conllu_paths.sort();

    println!("Processing {} files...", conllu_paths.len());

    let pb = create_progress_bar(conllu_paths.len() as u64);
    for path in conllu_paths.iter().progress_with(pb) {
        // One broken file must not abort the rest of the folder.
        let result = (|| {
            let output_path = updated_path(path)?;

            let bytes = fs::read(path).context("Failed to read")?;
            let txt = encoding_rs::UTF_8.decode(&bytes).0;

            let lines: Vec<&str> = txt.lines().collect();
            let corrected = correct_document(&lines);

            let mut out = corrected.join("\n");
            if !out.is_empty() {
                out.push('\n');
            }

            fs::write(&output_path, out).context("Failed to write")?;

            Ok::<(), anyhow::Error>(())
        })()
        .with_context(|| format!("Failed to process {}", path.display()));

        if let Err(err) = result {
            eprintln!("{:#}", err);
        }
    }

    println!("Finished.");

    Ok(())
}

// "x.conllu" -> "x_updated.conllu", next to the original
fn updated_path(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Invalid file name: {}", path.display()))?;

    let stem = file_name
        .strip_suffix(CONLLU_SUFFIX)
        .with_context(|| format!("Not a {} file: {}", CONLLU_SUFFIX, file_name))?;

    Ok(path.with_file_name(format!("{}{}{}", stem, UPDATED_SUFFIX, CONLLU_SUFFIX)))
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
