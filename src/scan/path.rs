use std::path::{Component, Path};

/// Render `path` relative to `root` with forward slashes on every platform.
///
/// Paths outside the root keep their normal components. `.` components are
/// dropped and root/prefix markers never appear in the result.
pub fn relative_source_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let mut components = Vec::new();

    for component in relative.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => continue,
            Component::ParentDir => components.push("..".to_string()),
            Component::Normal(part) => components.push(part.to_string_lossy().into_owned()),
        }
    }

    components.join("/")
}
