use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Build an output path by inserting `suffix` between the input file's stem
/// and its extension. The file lands next to the input unless `output_dir`
/// redirects it.
pub fn suffixed_output_path(input: &Path, suffix: &str, output_dir: Option<&Path>) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| OsStr::new(""));

    let mut name = OsString::from(stem);
    name.push(suffix);
    if let Some(extension) = input.extension() {
        name.push(".");
        name.push(extension);
    }

    let dir = output_dir.unwrap_or_else(|| input.parent().unwrap_or_else(|| Path::new("")));
    dir.join(name)
}

/// Whether a path looks like a SEG-Y file (`.sgy` or `.segy`, any case).
pub fn is_segy_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| ext.eq_ignore_ascii_case("sgy") || ext.eq_ignore_ascii_case("segy"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_inserted_before_extension() {
        let out = suffixed_output_path(Path::new("/data/line01.sgy"), "_utm30", None);
        assert_eq!(out, PathBuf::from("/data/line01_utm30.sgy"));
    }

    #[test]
    fn test_suffix_without_extension() {
        let out = suffixed_output_path(Path::new("/data/line01"), "_utm30", None);
        assert_eq!(out, PathBuf::from("/data/line01_utm30"));
    }

    #[test]
    fn test_output_dir_redirects() {
        let out = suffixed_output_path(
            Path::new("/data/line01.segy"),
            "_proj",
            Some(Path::new("/out")),
        );
        assert_eq!(out, PathBuf::from("/out/line01_proj.segy"));
    }

    #[test]
    fn test_relative_input_without_parent() {
        let out = suffixed_output_path(Path::new("line01.sgy"), "_x", None);
        assert_eq!(out, PathBuf::from("line01_x.sgy"));
    }

    #[test]
    fn test_is_segy_file() {
        assert!(is_segy_file(Path::new("a.sgy")));
        assert!(is_segy_file(Path::new("a.SGY")));
        assert!(is_segy_file(Path::new("a.segy")));
        assert!(is_segy_file(Path::new("a.SeGy")));
        assert!(!is_segy_file(Path::new("a.txt")));
        assert!(!is_segy_file(Path::new("sgy")));
        assert!(!is_segy_file(Path::new("a.sgy.bak")));
    }
}
