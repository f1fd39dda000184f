use crate::{EntriesError, Partnership};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// One `<school> <code> - <first> & <second>` line per entry
    Text,
    /// A json array of entries
    Json,
}

pub fn write_entries<W: Write>(
    out: &mut W,
    entries: &[Partnership],
    format: Format,
) -> Result<(), EntriesError> {
    match format {
        Format::Text => {
            for entry in entries {
                writeln!(out, "{}", entry)?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, entries)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entries() -> Vec<Partnership> {
        vec![
            Partnership::new("Lincoln HS", vec!["Smith".into(), "Jones".into()]).unwrap(),
            Partnership::new("Jefferson HS", vec!["O'Brien".into(), "Lee".into()]).unwrap(),
        ]
    }

    #[test]
    fn write_text() {
        let mut out = Vec::new();
        write_entries(&mut out, &entries(), Format::Text).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Lincoln HS SJ - Smith & Jones\nJefferson HS OL - O'Brien & Lee\n"
        );
    }

    #[test]
    fn write_json() {
        let mut out = Vec::new();
        write_entries(&mut out, &entries(), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"school": "Lincoln HS", "names": ["Smith", "Jones"]},
                {"school": "Jefferson HS", "names": ["O'Brien", "Lee"]},
            ])
        );
    }

    #[test]
    fn write_nothing() {
        let mut out = Vec::new();
        write_entries(&mut out, &[], Format::Text).unwrap();
        assert!(out.is_empty());
    }
}
