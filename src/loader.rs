//! CSV process loader.
//!
//! Reads headerless records of the form `id,burst,arrival[,priority]`.
//! Whitespace around fields is ignored and a missing priority defaults
//! to 0. The returned list is sorted by arrival (ties by id), ready to be
//! handed to any scheduler.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::dispatching::{rules::ByArrival, RankingRule};
use crate::error::{Error, Result};
use crate::models::Process;

const FIELD_NAMES: [&str; 4] = ["id", "burst", "arrival", "priority"];

/// Opens and loads a process file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Process>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let processes = load_processes(file)?;
    debug!(path = %path.display(), count = processes.len(), "loaded process file");
    Ok(processes)
}

/// Loads processes from any CSV source.
pub fn load_processes<R: Read>(reader: R) -> Result<Vec<Process>> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut processes = Vec::new();
    for record in csv.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        if record.iter().all(str::is_empty) {
            continue;
        }
        if !(3..=4).contains(&record.len()) {
            return Err(Error::parse(
                line,
                format!("expected 3 or 4 fields, found {}", record.len()),
            ));
        }

        let mut values = [0i64; 4];
        for (index, field) in record.iter().enumerate() {
            values[index] = field.parse().map_err(|_| {
                Error::parse(
                    line,
                    format!("{} {:?} is not an integer", FIELD_NAMES[index], field),
                )
            })?;
        }

        let [id, burst, arrival, priority] = values;
        processes.push(Process::new(id, burst, arrival).with_priority(priority));
    }

    processes.sort_by(|a, b| ByArrival.compare(a, b));
    Ok(processes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_basic() {
        let data = "1,4,0\n2,3,2\n3,1,3\n";
        let processes = load_processes(data.as_bytes()).unwrap();
        assert_eq!(processes.len(), 3);
        assert_eq!(processes[1], Process::new(2, 3, 2));
        assert_eq!(processes[1].remaining(), 3);
    }

    #[test]
    fn test_load_priority_and_default() {
        let data = "1,4,0,2\n2,3,2\n";
        let processes = load_processes(data.as_bytes()).unwrap();
        assert_eq!(processes[0].priority, 2);
        assert_eq!(processes[1].priority, 0);
    }

    #[test]
    fn test_load_sorts_by_arrival() {
        let data = "3,1,3\n1,4,0\n2,3,2\n4,5,0\n";
        let ids: Vec<i64> = load_processes(data.as_bytes())
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_load_trims_whitespace_and_skips_comments() {
        let data = "# id, burst, arrival, priority\n 1 , 4 , 0 , 1 \n\n2,3,2\n";
        let processes = load_processes(data.as_bytes()).unwrap();
        assert_eq!(processes.len(), 2);
        assert_eq!(processes[0].priority, 1);
    }

    #[test]
    fn test_load_non_integer_field() {
        let data = "1,4,0\n2,three,2\n";
        match load_processes(data.as_bytes()) {
            Err(Error::Parse { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("burst"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_wrong_field_count() {
        let data = "1,4\n";
        assert!(matches!(
            load_processes(data.as_bytes()),
            Err(Error::Parse { line: 1, .. })
        ));

        let data = "1,4,0,1,9\n";
        assert!(matches!(
            load_processes(data.as_bytes()),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn test_load_empty_source() {
        assert!(load_processes("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_file("/definitely/not/here.csv"),
            Err(Error::FileOpen { .. })
        ));
    }
}
