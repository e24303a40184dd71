use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use geojson::JsonValue;

use crate::error::ReduceError;

fn file_error(path: &Path) -> impl FnOnce(io::Error) -> ReduceError {
    let path = path.to_path_buf();
    move |source| ReduceError::File { path, source }
}

/// Size of the file on disk, in bytes.
pub fn file_size(filepath: &Path) -> Result<u64, ReduceError> {
    fs::metadata(filepath)
        .map(|metadata| metadata.len())
        .map_err(file_error(filepath))
}

/// Read and parse the whole GeoJSON file into memory. No schema validation happens here, any JSON
/// document is accepted.
pub fn read_geojson_document(filepath: &Path) -> Result<JsonValue, ReduceError> {
    let contents = fs::read(filepath).map_err(file_error(filepath))?;
    serde_json::from_slice(&contents).map_err(|source| ReduceError::Parse {
        path: filepath.to_path_buf(),
        source,
    })
}

/// Serialize the document in compact form and replace the file at `output_filepath` with it.
///
/// The contents go to a sibling `.tmp` file first which is then renamed over the target, so an
/// interrupted write leaves the original file in place. Symlinks are followed, the file they point
/// to is replaced and keeps its permissions. A missing file is created.
pub fn write_geojson_document(
    document: &JsonValue,
    output_filepath: &Path,
) -> Result<(), ReduceError> {
    let geojson_contents = serde_json::to_string(document).map_err(ReduceError::Serialize)?;
    let (target_filepath, permissions) = match fs::canonicalize(output_filepath) {
        Ok(target_filepath) => {
            let permissions = fs::metadata(&target_filepath)
                .map_err(file_error(&target_filepath))?
                .permissions();
            (target_filepath, Some(permissions))
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => (output_filepath.to_path_buf(), None),
        Err(err) => return Err(file_error(output_filepath)(err)),
    };
    let tmp_filepath = tmp_filepath_for(&target_filepath);
    if tmp_filepath.exists() {
        log::warn!("Overwriting leftover temporary file {:?}", &tmp_filepath);
    }
    log::debug!(
        "Writing {} bytes to {:?}",
        geojson_contents.len(),
        &tmp_filepath
    );
    fs::write(&tmp_filepath, geojson_contents).map_err(file_error(&tmp_filepath))?;

    let replaced = permissions
        .map_or(Ok(()), |permissions| fs::set_permissions(&tmp_filepath, permissions))
        .map_err(file_error(&tmp_filepath))
        .and_then(|_| {
            fs::rename(&tmp_filepath, &target_filepath).map_err(file_error(&target_filepath))
        });
    if replaced.is_err() {
        if let Err(err) = fs::remove_file(&tmp_filepath) {
            log::warn!("Could not remove {:?}: {}", &tmp_filepath, err);
        }
    }
    replaced
}

fn tmp_filepath_for(filepath: &Path) -> PathBuf {
    let mut filename = filepath
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(OsString::new);
    filename.push(".tmp");
    filepath.with_file_name(filename)
}
