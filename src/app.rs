use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::{error, info};

use crate::cli::Args;
use crate::error::{Codons2PeptideError, FileError};
use crate::genetic_code::{read_genetic_code_from_file, GeneticCode};
use crate::sequence::read_sequences_from_file;
use crate::translation::{Peptide, Translator, TranslatorConfig};

/// Translate the sequence or sequence file named in `args` and write the peptides
///
/// In file mode every line is translated even if others fail. Failed lines
/// are logged and left out of the output, and the run reports how many failed.
pub fn run(args: &Args) -> Result<(), Codons2PeptideError> {
    let translator = build_translator(args.table.as_deref(), args.strict_table)?;
    let output = args.output.as_deref();
    if args.file {
        translate_file(&translator, Path::new(&args.input), output)
    } else {
        let peptide = translator.translate_one(&args.input)?;
        write_output(output, &[peptide])?;
        Ok(())
    }
}

pub fn build_translator(
    table: Option<&Path>,
    strict_table: bool,
) -> Result<Translator, Codons2PeptideError> {
    let code = match table {
        Some(path) => {
            info!("Reading genetic code from file {}", path.display());
            read_genetic_code_from_file(path)?
        }
        None => GeneticCode::standard(),
    };
    let config = TranslatorConfig {
        require_complete_table: strict_table,
    };
    Ok(Translator::with_config(code, config)?)
}

fn translate_file(
    translator: &Translator,
    input: &Path,
    output: Option<&Path>,
) -> Result<(), Codons2PeptideError> {
    info!("Reading sequences from file {}", input.display());
    let records = read_sequences_from_file(input)?;
    let raw: Vec<&str> = records.iter().map(|r| r.sequence.as_str()).collect();
    let results = translator.translate_many(&raw);

    let total = records.len();
    let mut peptides = Vec::with_capacity(total);
    for (record, result) in records.iter().zip(results) {
        match result {
            Ok(peptide) => peptides.push(peptide),
            Err(e) => error!("Line {} of {}: {}", record.line_number, input.display(), e),
        }
    }
    let failed = total - peptides.len();
    info!("Translated {} of {} sequences", peptides.len(), total);

    write_output(output, &peptides)?;
    if failed > 0 {
        return Err(Codons2PeptideError::FailedSequences { failed, total });
    }
    Ok(())
}

/// Write peptides to a file (truncating it) or to stdout, one per line
pub fn write_output(output: Option<&Path>, peptides: &[Peptide]) -> Result<(), FileError> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| FileError::io(Some(path), e))?;
            write_peptides(BufWriter::new(file), peptides).map_err(|e| FileError::io(Some(path), e))
        }
        None => {
            let stdout = io::stdout();
            write_peptides(BufWriter::new(stdout.lock()), peptides)
                .map_err(|e| FileError::io(None::<&Path>, e))
        }
    }
}

pub fn write_peptides<W: Write>(mut writer: W, peptides: &[Peptide]) -> io::Result<()> {
    for peptide in peptides {
        writeln!(writer, "{}", peptide)?;
    }
    writer.flush()
}

/// An error and all of its sources, outermost first
pub fn describe(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    use crate::error::TranslationError;

    #[test]
    fn test_write_peptides() {
        let peptides = vec![
            translator().translate_one("ATGTTTTAA").unwrap(),
            translator().translate_one("CCCCCC").unwrap(),
            translator().translate_one("ATGAAA").unwrap(),
        ];
        let mut buffer = Vec::new();
        write_peptides(&mut buffer, &peptides).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "MF\n\nMK\n");
    }

    fn translator() -> Translator {
        build_translator(None, false).unwrap()
    }

    #[test]
    fn test_run_single_sequence_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("peptide.txt");
        fs::write(&out, "previous content\nthat is overwritten\n").unwrap();

        let mut args = Args::for_sequence("gggatgtggtaa");
        args.output = Some(out.clone());
        run(&args).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "MW\n");
    }

    #[test]
    fn test_run_single_invalid_sequence() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("peptide.txt");
        let mut args = Args::for_sequence("AT");
        args.output = Some(out.clone());
        let err = run(&args).unwrap_err();
        assert!(matches!(
            err,
            Codons2PeptideError::TranslationError(TranslationError::SequenceTooShort { length: 2 })
        ));
        assert!(!out.exists());
    }

    #[test]
    fn test_run_file_with_failures() {
        let dir = tempfile::TempDir::new().unwrap();
        let input = dir.path().join("sequences.txt");
        let out = dir.path().join("peptides.txt");
        fs::write(&input, "ATGTTTTAA\n\nXYZACGT\nGGGATGTGGTAA\nCCCCCC\n").unwrap();

        let mut args = Args::for_sequence(input.to_string_lossy());
        args.file = true;
        args.output = Some(out.clone());
        let err = run(&args).unwrap_err();
        assert!(matches!(
            err,
            Codons2PeptideError::FailedSequences {
                failed: 1,
                total: 4
            }
        ));
        assert_eq!(fs::read_to_string(&out).unwrap(), "MF\nMW\n\n");
    }

    #[test]
    fn test_run_missing_file() {
        let mut args = Args::for_sequence("/nonexistent/sequences.txt");
        args.file = true;
        let err = run(&args).unwrap_err();
        assert!(matches!(err, Codons2PeptideError::FileError(_)));
        assert!(describe(&err).starts_with("Failed to work with file /nonexistent/sequences.txt"));
    }

    #[test]
    fn test_build_translator_from_table() {
        let mut table = tempfile::NamedTempFile::new().unwrap();
        writeln!(table, "ATG\tM\nAAA\tK\nTAA\t*").unwrap();
        table.flush().unwrap();

        let lenient = build_translator(Some(table.path()), false).unwrap();
        assert_eq!(lenient.translate_one("ATGAAACCC").unwrap().as_str(), "MK");

        let strict = build_translator(Some(table.path()), true);
        assert!(matches!(strict, Err(Codons2PeptideError::TableError(_))));

        let mut no_start = tempfile::NamedTempFile::new().unwrap();
        writeln!(no_start, "AAA\tK").unwrap();
        no_start.flush().unwrap();
        let err = build_translator(Some(no_start.path()), false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The start codon is not defined: no codon maps to methionine"
        );
    }
}
