/// Longest directory-boundary-aligned prefix shared by all given paths.
///
/// The comparison operates on path segments rather than raw characters, so `/foo`
/// is never reported as a prefix of `/foobar`. The returned prefix carries no
/// trailing slash.
pub fn common_path_prefix(paths: &[&str]) -> String {
    let split: Vec<Vec<&str>> = paths.iter().map(|path| path.split('/').collect()).collect();
    let Some(first) = split.first() else {
        return String::new();
    };

    let depth = split.iter().map(Vec::len).min().unwrap_or(0);
    let mut shared: Vec<&str> = Vec::new();

    for level in 0..depth {
        let segment = first[level];
        if split[1..].iter().any(|other| other[level] != segment) {
            break;
        }
        shared.push(segment);
    }

    shared.join("/")
}

#[cfg(test)]
mod tests {
    use super::common_path_prefix;

    #[test]
    fn finds_shared_directory_prefix() {
        assert_eq!(common_path_prefix(&["/proj/", "/proj/old/"]), "/proj");
        assert_eq!(
            common_path_prefix(&["/proj/css/a", "/proj/css/b", "/proj/css"]),
            "/proj/css"
        );
    }

    #[test]
    fn never_matches_partial_segment_names() {
        assert_eq!(common_path_prefix(&["/foo", "/foobar"]), "");
        assert_eq!(common_path_prefix(&["/foo/x", "/foo/xy"]), "/foo");
    }

    #[test]
    fn returns_empty_for_disjoint_paths() {
        assert_eq!(common_path_prefix(&["/a/b", "c/d"]), "");
    }

    #[test]
    fn handles_empty_input() {
        assert_eq!(common_path_prefix(&[]), "");
    }
}
