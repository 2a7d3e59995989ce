//! Loading the genome sequence from a (possibly gzipped) FASTA file.

use anyhow::{bail, Context};

/// Reads the first record of a FASTA file into an upper-cased `ACGTN`
/// byte sequence. Anything outside that symbol set is dropped.
///
/// A file without a `>` header, or with no sequence data, is a fatal
/// input error. Extra records only produce a warning; positions in the
/// output refer to the first record.
pub fn load_sequence(infile: &str) -> anyhow::Result<Vec<u8>> {
    let reader = crate::libs::io::reader(infile)?;
    let mut fa_in = noodles_fasta::io::Reader::new(reader);

    let mut records = fa_in.records();
    let record = match records.next() {
        Some(result) => {
            result.with_context(|| format!("{} is not a valid FASTA file", infile))?
        }
        None => bail!("no sequences found in {}", infile),
    };

    let mut seq = Vec::with_capacity(record.sequence().len());
    for &b in record.sequence().as_ref() {
        match b.to_ascii_uppercase() {
            c @ (b'A' | b'C' | b'G' | b'T' | b'N') => seq.push(c),
            _ => {}
        }
    }

    if seq.is_empty() {
        bail!("first sequence in {} is empty", infile);
    }
    if records.next().is_some() {
        eprintln!(
            "Warning: {} contains more than one sequence; only the first is used",
            infile
        );
    }

    Ok(seq)
}
