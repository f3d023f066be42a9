// crates/countydb-core/src/writer.rs
use crate::error::{CountyDbError, Result};
use crate::model::Record;
use crate::text::title_case;
use crate::traits::Schema;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Encodes a record as one line (without the newline).
///
/// Columns listed in `S::TITLE_CASED` are written in title case, the rest
/// verbatim. There is no quoting.
pub fn encode_line<S: Schema>(record: &Record<S>) -> String {
    record
        .values()
        .iter()
        .enumerate()
        .map(|(i, v)| {
            if S::TITLE_CASED.contains(&i) {
                title_case(v)
            } else {
                v.trim().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Rejects values that would break the one-line, comma-separated format.
pub fn check_writable<S: Schema>(record: &Record<S>) -> Result<()> {
    for (name, value) in record.named_fields() {
        if value.contains([',', '\n', '\r']) {
            return Err(CountyDbError::InvalidInput(format!(
                "{name} may not contain commas or line breaks: {value:?}"
            )));
        }
    }
    Ok(())
}

/// Appends `record` as a new line at the end of the backing file.
///
/// Existing content is never rewritten. If the file does not end with a
/// newline, one is written first so the new row starts on its own line.
pub fn append_record<S: Schema>(path: impl AsRef<Path>, record: &Record<S>) -> Result<()> {
    let path = path.as_ref();
    check_writable(record)?;

    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| CountyDbError::io(path, e))?;

    let mut line = String::new();
    if ends_without_newline(&mut file).map_err(|e| CountyDbError::io(path, e))? {
        line.push('\n');
    }
    line.push_str(&encode_line(record));
    line.push('\n');

    file.write_all(line.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| CountyDbError::io(path, e))?;

    log::info!("appended '{}' to {}", line.trim(), path.display());
    Ok(())
}

fn ends_without_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ByCity;
    use std::fs;

    fn city(county: &str, name: &str, lp: &str) -> Record<ByCity> {
        Record::from_fields(vec![county.into(), name.into(), lp.into()]).unwrap()
    }

    #[test]
    fn encodes_title_cased_names_and_raw_prefix() {
        assert_eq!(
            encode_line(&city("silver bow", "anaconda", " 2 ")),
            "Silver Bow,Anaconda,2"
        );
    }

    #[test]
    fn appends_without_touching_existing_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cities.csv");
        fs::write(&path, "County,City,LP\nSilver Bow,Butte,1\n").unwrap();

        append_record(&path, &city("Silver Bow", "walkerville", "1")).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "County,City,LP\nSilver Bow,Butte,1\nSilver Bow,Walkerville,1\n");
    }

    #[test]
    fn repairs_missing_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cities.csv");
        fs::write(&path, "Silver Bow,Butte,1").unwrap();

        append_record(&path, &city("Cascade", "belt", "2")).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Silver Bow,Butte,1\nCascade,Belt,2\n");
    }

    #[test]
    fn creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.csv");
        append_record(&path, &city("Park", "gardiner", "49")).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Park,Gardiner,49\n");
    }

    #[test]
    fn rejects_embedded_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cities.csv");
        let err = append_record(&path, &city("Park", "a,b", "49")).unwrap_err();
        assert!(err.is_recoverable());
        assert!(!path.exists());
    }
}
