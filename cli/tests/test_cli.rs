#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::fs;
    use std::io::Write;
    use std::process::{Command, Stdio};

    use ninek_cli::{run_batch, run_prompt, PromptSummary, EXIT_FAILURE, EXIT_SUCCESS};
    use ninek_core::pipeline::PipelineConfig;

    const SAVE: &str = r#"{"slot":3,"gold":9000}"#;

    fn argv(parts: &[&str]) -> Vec<OsString> {
        parts.iter().map(OsString::from).collect()
    }

    // --- Library entry points ---

    #[test]
    fn test_batch_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("save.json");
        fs::write(&source, SAVE).unwrap();
        let config = PipelineConfig::default();

        let (mut out, mut err) = (Vec::new(), Vec::new());
        let status = run_batch(&argv(&["ninek", "-c", source.to_str().unwrap()]), &config, &mut out, &mut err).unwrap();
        assert_eq!(status, EXIT_SUCCESS);
        let packed = dir.path().join("save_out.9ks");
        let stdout = String::from_utf8(out).unwrap();
        assert!(stdout.starts_with("SUCCESS: Compressed"));
        assert!(stdout.contains("save_out.9ks"));
        assert!(err.is_empty());

        let (mut out, mut err) = (Vec::new(), Vec::new());
        let status = run_batch(&argv(&["ninek", "-d", packed.to_str().unwrap()]), &config, &mut out, &mut err).unwrap();
        assert_eq!(status, EXIT_SUCCESS);
        assert!(String::from_utf8(out).unwrap().starts_with("SUCCESS: Decompressed"));
        assert_eq!(fs::read_to_string(dir.path().join("save_out.json")).unwrap(), SAVE);
    }

    #[test]
    fn test_batch_usage_errors() {
        let config = PipelineConfig::default();
        for parts in [&["ninek"][..], &["ninek", "-x", "a.json"][..], &["ninek", "-c"][..]] {
            let (mut out, mut err) = (Vec::new(), Vec::new());
            assert_eq!(run_batch(&argv(parts), &config, &mut out, &mut err).unwrap(), EXIT_FAILURE);
            assert!(out.is_empty());
            assert!(String::from_utf8(err).unwrap().contains("Usage: ninek -[d|c] <file_path>"));
        }
    }

    #[test]
    fn test_batch_empty_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("empty.json");
        fs::write(&source, b"").unwrap();

        let (mut out, mut err) = (Vec::new(), Vec::new());
        let status = run_batch(
            &argv(&["ninek", "-c", source.to_str().unwrap()]),
            &PipelineConfig::default(),
            &mut out,
            &mut err,
        )
        .unwrap();
        assert_eq!(status, EXIT_FAILURE);
        assert!(String::from_utf8(err).unwrap().starts_with("Error: "));
        assert!(!dir.path().join("empty_out.9ks").exists());
    }

    #[test]
    fn test_prompt_session() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("save.json");
        fs::write(&source, SAVE).unwrap();
        let packed = dir.path().join("save_out.9ks");
        let missing = dir.path().join("missing.9ks");

        let script = format!(
            "c {}\nd {}\nd {}\nexit\nc {}\n",
            source.display(),
            packed.display(),
            missing.display(),
            source.display()
        );
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let summary = run_prompt(script.as_bytes(), &mut out, &mut err, &PipelineConfig::default()).unwrap();

        assert_eq!(summary, PromptSummary { succeeded: 2, failed: 1 });
        assert_eq!(fs::read_to_string(dir.path().join("save_out.json")).unwrap(), SAVE);
        assert!(String::from_utf8(err).unwrap().contains("missing.9ks"));
    }

    // --- Binaries ---

    #[test]
    fn test_binary_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("save.json");
        fs::write(&source, SAVE).unwrap();

        let ok = Command::new(env!("CARGO_BIN_EXE_ninek")).arg("-c").arg(&source).output().unwrap();
        assert_eq!(ok.status.code(), Some(0));
        assert!(dir.path().join("save_out.9ks").exists());

        let blank = dir.path().join("blank.9ks");
        fs::write(&blank, "   \n\t  ").unwrap();
        let failed = Command::new(env!("CARGO_BIN_EXE_ninek")).arg("-d").arg(&blank).output().unwrap();
        assert_eq!(failed.status.code(), Some(1));
        assert!(!dir.path().join("blank.json").exists());

        let usage = Command::new(env!("CARGO_BIN_EXE_ninek")).output().unwrap();
        assert_eq!(usage.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&usage.stderr).contains("Usage:"));
    }

    #[cfg(unix)]
    #[test]
    fn test_binary_accepts_non_utf8_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join(OsStr::from_bytes(b"save\xff.json"));
        fs::write(&source, SAVE).unwrap();

        let status = Command::new(env!("CARGO_BIN_EXE_ninek")).arg("-c").arg(&source).status().unwrap();
        assert_eq!(status.code(), Some(0));
        let packed = dir.path().join(OsStr::from_bytes(b"save\xff_out.9ks"));
        assert!(packed.exists());

        let status = Command::new(env!("CARGO_BIN_EXE_ninek")).arg("-d").arg(&packed).status().unwrap();
        assert_eq!(status.code(), Some(0));
        let restored = dir.path().join(OsStr::from_bytes(b"save\xff_out.json"));
        assert_eq!(fs::read_to_string(restored).unwrap(), SAVE);
    }

    #[test]
    fn test_prompt_binary_reads_stdin() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("save.json");
        fs::write(&source, SAVE).unwrap();

        let mut child = Command::new(env!("CARGO_BIN_EXE_ninek-prompt"))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        child
            .stdin
            .take()
            .unwrap()
            .write_all(format!("c {}\nexit\n", source.display()).as_bytes())
            .unwrap();
        let output = child.wait_with_output().unwrap();

        assert_eq!(output.status.code(), Some(0));
        assert!(String::from_utf8_lossy(&output.stdout).contains("SUCCESS: Compressed"));
        assert!(dir.path().join("save_out.9ks").exists());
    }
}
