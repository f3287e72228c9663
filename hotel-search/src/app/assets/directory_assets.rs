use super::{AssetError, AssetSource};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// reads assets as `<data_dir>/<name>` from the filesystem.
#[derive(Clone, Debug)]
pub struct DirectoryAssets {
    data_dir: PathBuf,
}

impl DirectoryAssets {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> DirectoryAssets {
        DirectoryAssets {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }
}

impl AssetSource for DirectoryAssets {
    fn load(&self, name: &str) -> Result<Cow<'_, [u8]>, AssetError> {
        let path = self.data_dir.join(name);
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Cow::Owned(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AssetError::NotFound {
                name: name.to_string(),
                location: self.location(),
            }),
            Err(e) => Err(AssetError::ReadFailure {
                name: name.to_string(),
                location: path.display().to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn location(&self) -> String {
        format!("directory {}", self.data_dir.display())
    }
}
