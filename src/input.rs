//! Reading named strands from `name,SEQUENCE` text files

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use log::{debug, info};

use crate::error::{Result, SequencerError};

/// One raw line of a strand file: a name and its unfiltered symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrandRecord {
    pub name: String,
    pub sequence: String,
}

impl StrandRecord {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> StrandRecord {
        StrandRecord {
            name: name.into(),
            sequence: sequence.into(),
        }
    }
}

/// Split one line at the first comma. A line without a comma is all name.
pub fn parse_record_line(line: &str) -> StrandRecord {
    match line.split_once(',') {
        Some((name, sequence)) => StrandRecord::new(name, sequence),
        None => StrandRecord::new(line, ""),
    }
}

/// Parse every line of a reader into records. Bytes that are not UTF-8 are
/// replaced rather than failing the read, and a blank line yields an empty record.
pub fn parse_strand_records<R: BufRead>(mut reader: R) -> std::io::Result<Vec<StrandRecord>> {
    let mut records = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            debug!("Blank line {} becomes an empty strand", records.len() + 1);
        }

        records.push(parse_record_line(line));
    }

    Ok(records)
}

/// Open a strand file, decompressing it when the name ends in `.gz`
pub fn read_strand_file(path: &Path) -> Result<Vec<StrandRecord>> {
    let unavailable = |source| SequencerError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;
    let is_gzip = path.extension().is_some_and(|ext| ext == "gz");

    let reader: Box<dyn Read> = if is_gzip {
        debug!("Decompressing {path:?}");
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let records = parse_strand_records(BufReader::new(reader)).map_err(unavailable)?;
    info!("Read {} records from {path:?}", records.len());
    Ok(records)
}
