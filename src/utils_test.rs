// force-align/src/utils_test.rs

#[cfg(test)]
mod tests {
    use crate::utils::{open_input, realtime};
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::fs;
    use std::io::{self, Read, Write};
    use std::path::PathBuf;

    fn test_dir() -> io::Result<PathBuf> {
        let dir = PathBuf::from("target/test_utils");
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    #[test]
    fn test_open_plain_file() -> io::Result<()> {
        let path = test_dir()?.join("corpus.txt");
        fs::write(&path, b"le chat ||| the cat\n")?;

        let mut content = String::new();
        open_input(&path)?.read_to_string(&mut content)?;
        assert_eq!(content, "le chat ||| the cat\n");
        Ok(())
    }

    #[test]
    fn test_open_gzipped_file() -> io::Result<()> {
        let path = test_dir()?.join("corpus.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"la maison ||| the house\n")?;
        fs::write(&path, encoder.finish()?)?;

        let mut content = String::new();
        open_input(&path)?.read_to_string(&mut content)?;
        assert_eq!(content, "la maison ||| the house\n");
        Ok(())
    }

    #[test]
    fn test_open_missing_file_is_an_error() {
        let err = open_input(&PathBuf::from("target/test_utils/missing.txt"))
            .err()
            .expect("open should fail");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_realtime_is_positive_and_monotonic_enough() {
        let t1 = realtime();
        let t2 = realtime();
        assert!(t1 > 0.0);
        assert!(t2 >= t1);
    }
}
