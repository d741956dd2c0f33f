use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::FIELDS;
use std::path::Path;

/// Create the data file with a header row so a fresh installation has
/// something to load. Existing files are left alone.
pub fn run(path: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if path.exists() {
        result.add_message(CmdMessage::info(format!(
            "Data file already exists at {}",
            path.display()
        )));
        return Ok(result);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(FIELDS)?;
    writer.flush()?;

    result.add_message(CmdMessage::success(format!(
        "Initialized data file at {}",
        path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fs::FileStore;
    use crate::store::DataStore;

    #[test]
    fn creates_a_loadable_header_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");

        run(&path).unwrap();

        let mut store = FileStore::new(&path);
        let report = store.reload().unwrap();
        assert_eq!(report.loaded, 0);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn leaves_an_existing_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");
        std::fs::write(&path, "id,name\n1,W\n").unwrap();

        let result = run(&path).unwrap();

        assert!(result.messages[0].content.contains("already exists"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "id,name\n1,W\n"
        );
    }
}
