use std::path::{Path, PathBuf};

const RESULT_SUFFIX: &str = ".result.json";

/// Request files of a folder and its subfolders, sorted. Result files written
/// by a previous run are skipped.
pub fn read_requests(folder_path: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder_path)? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(read_requests(&path)?);
        } else if is_request_file(&path) {
            files.push(path);
        }
    }

    files.sort();

    Ok(files)
}

fn is_request_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };

    name.ends_with(".json") && !name.ends_with(RESULT_SUFFIX)
}

/// `squad.json` becomes `squad.result.json`, next to the request or inside
/// `out` when given.
pub fn result_path(request: &Path, out: Option<&Path>) -> PathBuf {
    let stem = request
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("request");
    let name = format!("{stem}{RESULT_SUFFIX}");

    match out {
        Some(out) => out.join(name),
        None => request.with_file_name(name),
    }
}
