use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn codons2peptide() -> Command {
    Command::cargo_bin("codons2peptide").expect("binary is built")
}

fn write(path: &Path, content: &str) {
    fs::write(path, content).expect("failed to write test input");
}

#[test]
fn translates_a_single_sequence() {
    codons2peptide()
        .arg("ATGTTTTAA")
        .assert()
        .success()
        .stdout("MF\n");
    codons2peptide()
        .arg("gggatgtggtaa")
        .assert()
        .success()
        .stdout("MW\n");
}

#[test]
fn missing_start_codon_is_not_an_error() {
    codons2peptide()
        .arg("CCCCCC")
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn rejects_invalid_sequences() {
    let output = codons2peptide().arg("XYZACGT").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Sequence must only contain A/T/C/G/a/t/c/g"));

    let output = codons2peptide().arg("AT").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Sequence is too short"));
}

#[test]
fn translates_a_file_to_stdout() {
    let temp = TempDir::new().expect("failed to create temporary directory");
    let input = temp.path().join("sequences.txt");
    write(&input, "ATGTTTTAA\n\nATGAAA\ncccccc\n");

    codons2peptide()
        .arg("-f")
        .arg(&input)
        .assert()
        .success()
        .stdout("MF\nMK\n\n");
}

#[test]
fn failing_lines_do_not_stop_a_batch() {
    let temp = TempDir::new().expect("failed to create temporary directory");
    let input = temp.path().join("sequences.txt");
    let output = temp.path().join("peptides.txt");
    write(&input, "ATGTTTTAA\nXYZACGT\nGGGATGTGGTAA\n");
    write(&output, "stale\nstale\nstale\nstale\n");

    let result = codons2peptide()
        .arg("--file")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .output()
        .unwrap();
    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Sequence must only contain"));
    assert!(stderr.contains("1 of 3 sequences could not be translated"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "MF\nMW\n");
}

#[test]
fn missing_input_file() {
    let temp = TempDir::new().expect("failed to create temporary directory");
    let result = codons2peptide()
        .arg("-f")
        .arg(temp.path().join("nope.txt"))
        .output()
        .unwrap();
    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("nope.txt"));
}

#[test]
fn custom_genetic_code() {
    let temp = TempDir::new().expect("failed to create temporary directory");
    let table = temp.path().join("code.tsv");
    write(&table, "# partial code\nATG\tM\nAAA\tK\nTAA\t*\n");

    codons2peptide()
        .arg("-t")
        .arg(&table)
        .arg("ATGAAACCCAAA")
        .assert()
        .success()
        .stdout("MK\n");

    let result = codons2peptide()
        .arg("-t")
        .arg(&table)
        .arg("--strict-table")
        .arg("ATGAAA")
        .output()
        .unwrap();
    assert_eq!(result.status.code(), Some(1));
    assert!(result.stdout.is_empty());
    assert!(String::from_utf8_lossy(&result.stderr).contains("Genetic code is not complete"));
}

#[test]
fn genetic_code_without_start_codon() {
    let temp = TempDir::new().expect("failed to create temporary directory");
    let table = temp.path().join("code.tsv");
    write(&table, "AAA\tK\nTAA\t*\n");

    let result = codons2peptide()
        .arg("--table")
        .arg(&table)
        .arg("ATGAAA")
        .output()
        .unwrap();
    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("The start codon is not defined"));
}

#[test]
fn hash_and_whitespace_lines_are_reported() {
    let temp = TempDir::new().expect("failed to create temporary directory");
    let input = temp.path().join("sequences.txt");
    write(&input, "ATGAAA\n#ACGT\n\n  \nATGTTTTAA\n");

    let result = codons2peptide().arg("-f").arg(&input).output().unwrap();
    assert_eq!(result.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&result.stdout), "MK\nMF\n");
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Line 2 of"));
    assert!(stderr.contains("found '#' at position 0"));
    assert!(stderr.contains("Line 4 of"));
    assert!(stderr.contains("found ' ' at position 0"));
    assert!(stderr.contains("2 of 4 sequences could not be translated"));
}
