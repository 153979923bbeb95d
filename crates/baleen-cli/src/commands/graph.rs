use std::path::PathBuf;

use baleen_core::VariableRecord;
use baleen_lib::records::SnapshotBuilder;

use super::files::{or_exit, read_json, write_json};

pub struct GraphArgs {
    pub records: Vec<PathBuf>,
    pub output: Option<PathBuf>,
}

pub fn run(args: GraphArgs) {
    let mut builder = SnapshotBuilder::new();
    let mut skipped = 0;

    for path in &args.records {
        let records: Vec<VariableRecord> = match read_json(path) {
            Ok(records) => records,
            Err(e) => {
                eprintln!("error: {}", e);
                skipped += 1;
                continue;
            }
        };
        if let Err(e) = builder.add_document(&records) {
            eprintln!("error: {}: {}", path.display(), e);
            skipped += 1;
        }
    }

    let documents = builder.documents();
    let snapshot = builder.finish();
    or_exit(write_json(&snapshot, args.output.as_deref()));
    eprintln!(
        "{} variables, {} tentails edges from {} documents ({} skipped)",
        snapshot.variables.len(),
        snapshot.tentails.len(),
        documents,
        skipped
    );
}
