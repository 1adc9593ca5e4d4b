//! HTTP span helpers.

use uuid::Uuid;

/// Collapse identifiers in a request path so it can be used as a low
/// cardinality route label.
pub(super) fn route_label(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut normalised = String::from("/");
    let mut previous = "";

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            normalised.push('/');
        }

        if Uuid::parse_str(segment).is_ok() {
            normalised.push_str("{uuid}");
        } else if previous == "licenses" && !segment.is_empty() {
            normalised.push_str("{license}");
        } else {
            normalised.push_str(segment);
        }

        previous = segment;
    }

    normalised
}
