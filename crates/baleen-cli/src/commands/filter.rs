use std::path::PathBuf;

use baleen_core::VariableRecord;
use baleen_lib::records::retain_variables;

use super::files::{or_exit, read_json, write_json};

pub struct FilterArgs {
    pub records: PathBuf,
    pub output: Option<PathBuf>,
}

pub fn run(args: FilterArgs) {
    let records: Vec<VariableRecord> = or_exit(read_json(&args.records));
    let before = records.len();
    let kept = retain_variables(records);
    or_exit(write_json(&kept, args.output.as_deref()));
    eprintln!("kept {} of {} records", kept.len(), before);
}
