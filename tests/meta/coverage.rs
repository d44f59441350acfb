//! Enforces the one-to-one mirror between `src` modules and `tests/unit` files

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    /// Files that only declare modules or start a binary
    fn is_structural(relative: &str) -> bool {
        relative == "lib.rs" || relative.ends_with("main.rs") || relative.ends_with("mod.rs")
    }

    /// Relative paths of every `.rs` file and directory below `root`
    fn mirror_paths(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(root)
                    .map_err(|error| io::Error::other(error.to_string()))?
                    .to_string_lossy()
                    .into_owned();

                if path.is_dir() {
                    paths.insert(relative);
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    paths.insert(relative);
                }
            }
        }

        Ok(paths)
    }

    fn missing_from(expected: &BTreeSet<String>, actual: &BTreeSet<String>) -> Vec<String> {
        expected
            .iter()
            .filter(|path| !is_structural(path) && !actual.contains(*path))
            .cloned()
            .collect()
    }

    #[test]
    fn test_every_src_file_has_unit_tests() -> io::Result<()> {
        let src = mirror_paths(Path::new(SRC_DIR))?;
        let unit = mirror_paths(Path::new(UNIT_DIR))?;

        let missing = missing_from(&src, &unit);
        assert!(
            missing.is_empty(),
            "src files without a tests/unit counterpart:\n  {}",
            missing.join("\n  ")
        );
        Ok(())
    }

    #[test]
    fn test_every_unit_test_has_src_counterpart() -> io::Result<()> {
        let src = mirror_paths(Path::new(SRC_DIR))?;
        let unit = mirror_paths(Path::new(UNIT_DIR))?;

        let orphaned = missing_from(&unit, &src);
        assert!(
            orphaned.is_empty(),
            "tests/unit files without a src counterpart:\n  {}",
            orphaned.join("\n  ")
        );
        Ok(())
    }

    #[test]
    fn test_unit_files_contain_tests() -> io::Result<()> {
        let unit_root = Path::new(UNIT_DIR);
        let mut empty = Vec::new();

        for relative in mirror_paths(unit_root)? {
            let path = unit_root.join(&relative);
            if path.is_dir() || is_structural(&relative) {
                continue;
            }
            if !fs::read_to_string(&path)?.contains("#[test]") {
                empty.push(relative);
            }
        }

        assert!(
            empty.is_empty(),
            "unit test files without any #[test] function:\n  {}",
            empty.join("\n  ")
        );
        Ok(())
    }
}
