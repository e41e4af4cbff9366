use binhex_core::{run_conversion, run_extraction, ConvertError, RunConfig};
use std::fs;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, content: &str) -> RunConfig {
    let input = dir.path().join(name);
    fs::write(&input, content).unwrap();
    RunConfig::new(input)
}

#[test]
fn test_three_line_file_with_one_match() {
    let dir = TempDir::new().unwrap();
    let config = write_input(
        &dir,
        "regs.h",
        "#define A 1\n#define MASK 0b00001010\n#define B 2\n",
    );

    let mut echoed = Vec::new();
    let summary = run_conversion(&config, |line| echoed.push(line.to_string())).unwrap();

    assert_eq!(summary.lines, 3);
    assert_eq!(summary.converted, 1);
    assert_eq!(echoed, vec!["#define MASK 0x0a\n"]);
    assert_eq!(
        fs::read_to_string(dir.path().join("regs.h.out")).unwrap(),
        "#define A 1\n#define MASK 0x0a\n#define B 2\n"
    );
}

#[test]
fn test_unterminated_last_line_gets_a_newline_in_output() {
    let dir = TempDir::new().unwrap();
    let config = write_input(&dir, "tail.txt", "x = 0b11111111\ny = 0b00000000");

    let mut echoed = Vec::new();
    run_conversion(&config, |line| echoed.push(line.to_string())).unwrap();

    assert_eq!(echoed, vec!["x = 0xff\n", "y = 0x00"]);
    assert_eq!(
        fs::read_to_string(&config.output).unwrap(),
        "x = 0xff\ny = 0x00\n"
    );
}

#[test]
fn test_empty_input_produces_empty_output() {
    let dir = TempDir::new().unwrap();
    let config = write_input(&dir, "empty.txt", "");

    let summary = run_conversion(&config, |_| {}).unwrap();

    assert_eq!(summary.lines, 0);
    assert_eq!(fs::read_to_string(&config.output).unwrap(), "");
}

#[test]
fn test_existing_output_file_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let config = write_input(&dir, "in.txt", "plain\n");
    fs::write(&config.output, "left over from an earlier run\n").unwrap();

    run_conversion(&config, |_| {}).unwrap();

    assert_eq!(fs::read_to_string(&config.output).unwrap(), "plain\n");
}

#[test]
fn test_missing_input_writes_no_output() {
    let dir = TempDir::new().unwrap();
    let config = RunConfig::new(dir.path().join("absent.txt"));

    let result = run_conversion(&config, |_| {});

    assert!(matches!(result, Err(ConvertError::FileAccess { .. })));
    assert!(!config.output.exists());
}

#[test]
fn test_extraction_reads_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("names.txt");
    fs::write(&input, "motor1 = servo2;\nempty line\ntask3 radio4\n").unwrap();

    let mut printed = Vec::new();
    let matched = run_extraction(&input, |token| printed.push(token.to_string())).unwrap();

    assert_eq!(matched, 2);
    assert_eq!(printed, vec!["(servo2)", "(radio4)"]);
    assert!(!dir.path().join("names.txt.out").exists());
}
