use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use baleen_core::{ParsedDocument, VariableRecord};
use baleen_lib::Config;
use baleen_lib::pstree::{LeafMode, NodeNumbering, TreeOptions};
use baleen_lib::records::{BatchReport, DocumentJob, enrich_batch, group_by_filename};
use tracing::warn;

use super::files::{FileError, document_path, or_exit, read_json, write_json};

pub struct EnrichArgs {
    pub records: Vec<PathBuf>,
    pub documents: PathBuf,
    pub output: PathBuf,
    pub strict: bool,
    pub leaf_mode: Option<LeafMode>,
    pub numbering: Option<NodeNumbering>,
}

pub fn run(args: EnrichArgs, config: &Config) {
    let options = TreeOptions {
        leaf_mode: args.leaf_mode.unwrap_or(config.offsets.leaf_mode),
        numbering: args.numbering.unwrap_or(config.offsets.numbering),
    };
    or_exit(fs::create_dir_all(&args.output).map_err(|source| FileError::Write {
        path: args.output.clone(),
        source,
    }));

    let mut failed = 0;
    let mut names = Vec::with_capacity(args.records.len());
    let mut jobs = Vec::new();
    for (path, name) in args.records.iter().zip(claim_output_names(&args.records)) {
        let Some(name) = name else {
            eprintln!(
                "error: {}: output {} is already written for another records file",
                path.display(),
                output_name(path)
            );
            failed += 1;
            continue;
        };
        match load_jobs(path, &name, &args.documents) {
            Ok(loaded) if loaded.is_empty() => {
                warn!(path = %path.display(), "skipping empty records file")
            }
            Ok(loaded) => {
                names.push(name);
                jobs.extend(loaded);
            }
            Err(e) => {
                eprintln!("error: {}", e);
                failed += 1;
            }
        }
    }

    let report = enrich_batch(jobs, &options);
    for failure in &report.failed {
        eprintln!("error: {}: {}", failure.name, failure.error);
    }

    let mut succeeded = 0;
    for (name, records) in assemble(&names, report) {
        let Some(records) = records else {
            failed += 1;
            continue;
        };
        match write_json(&records, Some(&args.output.join(&name))) {
            Ok(()) => succeeded += 1,
            Err(e) => {
                eprintln!("error: {}", e);
                failed += 1;
            }
        }
    }

    println!("{}", summary(succeeded, failed));
    if args.strict && failed > 0 {
        std::process::exit(1);
    }
}

/// Name of the enriched copy of a records file in the output directory.
pub fn output_name(path: &Path) -> String {
    if path.as_os_str() == "-" {
        return "stdin.json".to_owned();
    }
    path.file_name()
        .map_or_else(|| "records.json".to_owned(), |n| n.to_string_lossy().into_owned())
}

/// Output names for `paths`; `None` where an earlier path already took the name.
pub fn claim_output_names(paths: &[PathBuf]) -> Vec<Option<String>> {
    let mut taken = HashSet::new();
    paths
        .iter()
        .map(|path| {
            let name = output_name(path);
            taken.insert(name.clone()).then_some(name)
        })
        .collect()
}

/// One job per source document in a records file, all named `name`.
///
/// Records are grouped by `filename`, and each group is paired with
/// `DIR/<stem>.json`. An empty file yields no jobs.
pub fn load_jobs(path: &Path, name: &str, documents: &Path) -> Result<Vec<DocumentJob>, FileError> {
    let records: Vec<VariableRecord> = read_json(path)?;
    group_by_filename(records)
        .into_iter()
        .map(|(filename, records)| {
            let document: ParsedDocument = read_json(&document_path(documents, &filename))?;
            Ok(DocumentJob {
                name: name.to_owned(),
                records,
                document,
            })
        })
        .collect()
}

/// Reassembles records per output name, in `names` order.
///
/// A records file whose documents did not all succeed yields `None`.
pub fn assemble(names: &[String], report: BatchReport) -> Vec<(String, Option<Vec<VariableRecord>>)> {
    let failed: HashSet<&str> = report.failed.iter().map(|f| f.name.as_str()).collect();
    let mut merged: HashMap<String, Vec<VariableRecord>> = HashMap::new();
    for doc in report.succeeded {
        merged.entry(doc.name).or_default().extend(doc.records);
    }

    names
        .iter()
        .map(|name| {
            let records = if failed.contains(name.as_str()) {
                None
            } else {
                Some(merged.remove(name).unwrap_or_default())
            };
            (name.clone(), records)
        })
        .collect()
}

/// `N succeeded, M failed`, counted in records files.
pub fn summary(succeeded: usize, failed: usize) -> String {
    format!("{} succeeded, {} failed", succeeded, failed)
}
