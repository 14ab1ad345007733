use std::path::Path;

use super::normalize::to_url_path;

/// Compute the minimal relative path that reaches `to` when resolved against the
/// directory of `from`.
///
/// Shared leading segments are stripped and replaced by the `../` ascents needed to
/// climb out of `from`'s directory. When the two URLs share no common ancestor at
/// all (mismatched roots, or a scheme-qualified target) the target is returned
/// unchanged as an absolute-style fallback rather than producing a broken ascent.
pub fn relative_url(from: &str, to: &str) -> String {
    let mut base: Vec<&str> = from.split('/').collect();
    base.pop(); // drop the file name, keep the directory

    let target: Vec<&str> = to.split('/').collect();
    let shared = base
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| a == b)
        .count();

    if shared == 0 {
        let absolute_style = target
            .first()
            .is_some_and(|segment| segment.is_empty() || segment.contains(':'));
        if base.is_empty() || absolute_style {
            return to.to_string();
        }
    }

    let mut parts: Vec<&str> = vec![".."; base.len() - shared];
    parts.extend(&target[shared..]);
    parts.join("/")
}

/// Compute the path of `target_url` relative to the directory of `output_path`,
/// anchoring both under the project root.
///
/// `root` must be the project root in URL form with a trailing slash. Returns `None`
/// when the output path does not live under the root, in which case the caller has
/// no way to relate the two locations and must fall back to its default behaviour.
pub fn relative_from_output(root: &str, output_path: &Path, target_url: &str) -> Option<String> {
    let output = to_url_path(&output_path.to_string_lossy());
    let output_rel = output.strip_prefix(root)?;
    let target_rel = target_url.trim_start_matches('/');
    Some(relative_url(output_rel, target_rel))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{relative_from_output, relative_url};

    #[test]
    fn ascends_out_of_the_source_directory() {
        assert_eq!(
            relative_url("/proj/build/out.css", "/proj/css/img/x.png"),
            "../css/img/x.png"
        );
        assert_eq!(
            relative_url("build/out.css", "assets/v1/x.png"),
            "../assets/v1/x.png"
        );
    }

    #[test]
    fn emits_plain_paths_when_directories_coincide() {
        assert_eq!(relative_url("css/out.css", "css/img/x.png"), "img/x.png");
        assert_eq!(relative_url("/out.css", "/img/x.png"), "img/x.png");
    }

    #[test]
    fn handles_sources_at_the_root() {
        assert_eq!(relative_url("out.css", "css/img/x.png"), "css/img/x.png");
    }

    #[test]
    fn falls_back_to_the_target_on_mismatched_roots() {
        assert_eq!(relative_url("css/out.css", "/images/x.png"), "/images/x.png");
        assert_eq!(
            relative_url("css/out.css", "http://cdn.example.com/x.png"),
            "http://cdn.example.com/x.png"
        );
    }

    #[test]
    fn relates_an_output_path_to_a_root_anchored_target() {
        let result =
            relative_from_output("/proj/", Path::new("/proj/build/out.css"), "assets/v1/x.png");
        assert_eq!(result.as_deref(), Some("../assets/v1/x.png"));

        let rooted =
            relative_from_output("/proj/", Path::new("/proj/build/out.css"), "/static/v1/x.png");
        assert_eq!(rooted.as_deref(), Some("../static/v1/x.png"));
    }

    #[test]
    fn rejects_outputs_outside_the_project_root() {
        let result =
            relative_from_output("/proj/", Path::new("/elsewhere/out.css"), "assets/x.png");
        assert_eq!(result, None);
    }
}
