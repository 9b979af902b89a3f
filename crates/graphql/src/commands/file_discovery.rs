use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub(crate) struct DiscoveredFiles {
    pub errors: Vec<anyhow::Error>,
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
}

/// Normalizes a list of extensions like `graphql` or `.graphql` into a set of
/// `.`-prefixed extensions.
pub(crate) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| {
            if !ext.starts_with('.') {
                format!(".{ext}")
            } else {
                ext.to_owned()
            }
        })
        .collect()
}

/// Finds all files recursively located at or under each of `paths` whose
/// extension is in `exts`.
///
/// If a single file path is given and nothing matched, that file is returned
/// anyway: the user presumably wants exactly that file loaded.
pub(crate) fn discover_files(paths: &[PathBuf], exts: &HashSet<String>) -> DiscoveredFiles {
    let mut discovered = DiscoveredFiles::default();
    log::debug!("Scanning {} input paths...", paths.len());

    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    discovered.errors.push(e.into());
                    continue
                },
            };

            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }

            log::trace!("Found file at {entry_path:#?}.");
            let matches_ext = entry_path.extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()))
                .is_some_and(|ext| exts.contains(&ext));
            if !matches_ext {
                discovered.num_skipped += 1;
                continue;
            }

            match std::fs::canonicalize(entry_path) {
                Ok(canonical) => discovered.file_paths.push(canonical),
                Err(e) => discovered.errors.push(e.into()),
            }
        }
    }

    if discovered.file_paths.is_empty()
        && paths.len() == 1
        && let Some(first_path) = paths.first()
        && first_path.is_file() {
        log::warn!(
            "Proceeding with {first_path:#?} even though it doesn't match any \
            of the expected file extensions ({}).",
            exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        discovered.num_skipped = discovered.num_skipped.saturating_sub(1);
        discovered.file_paths.push(first_path.to_owned());
    }

    log::debug!("Found {} matching files.", discovered.file_paths.len());
    discovered
}
