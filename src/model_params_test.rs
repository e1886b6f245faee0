// force-align/src/model_params_test.rs

#[cfg(test)]
mod tests {
    use crate::model_params::read_error_log;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    // Helper for writing a log fixture under target/
    fn write_log(name: &str, content: &str) -> io::Result<PathBuf> {
        let dir = PathBuf::from("target/test_model_params");
        fs::create_dir_all(&dir)?;
        let path = dir.join(name);
        fs::write(&path, content.as_bytes())?;
        Ok(path)
    }

    #[test]
    fn test_recovers_both_parameters() -> io::Result<()> {
        let path = write_log(
            "both.err",
            "ARG=corpus.f-e\n\
             expected target length = source length * 1.10631\n\
             ITERATION 1\n\
             log_e likelihood: -394936\n\
               final tension: 4.40103\n",
        )?;
        let params = read_error_log(&path)?;
        assert_eq!(params.mean_ratio, "1.10631");
        assert_eq!(params.tension, "4.40103");
        Ok(())
    }

    #[test]
    fn test_missing_markers_leave_fields_empty() -> io::Result<()> {
        let path = write_log("empty.err", "ITERATION 1\nlog_e likelihood: -1.5\n")?;
        let params = read_error_log(&path)?;
        assert_eq!(params.mean_ratio, "");
        assert_eq!(params.tension, "");
        Ok(())
    }

    #[test]
    fn test_last_marker_occurrence_wins() -> io::Result<()> {
        let path = write_log(
            "repeated.err",
            "  final tension: 1.0\n\
             expected target length = source length * 0.9\n\
               final tension: 2.5\n\
             expected target length = source length * 1.1\n",
        )?;
        let params = read_error_log(&path)?;
        assert_eq!(params.tension, "2.5");
        assert_eq!(params.mean_ratio, "1.1");
        Ok(())
    }

    #[test]
    fn test_value_is_last_whitespace_token() -> io::Result<()> {
        let path = write_log("spaced.err", "\t final tension:\t 3.25  \n")?;
        let params = read_error_log(&path)?;
        assert_eq!(params.tension, "3.25");
        Ok(())
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = read_error_log(Path::new("target/test_model_params/no_such.err")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
