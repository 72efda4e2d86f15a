use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Battery save file that sits next to the ROM.
pub fn save_path(rom_path: &Path) -> PathBuf {
    rom_path.with_extension("sav")
}

/// Read a save file. A missing file is not an error and yields `None`.
pub fn read_save(path: &Path) -> Result<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(data) => Ok(Some(data)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("reading save file {}", path.display())),
    }
}

pub fn write_save(path: &Path, data: &[u8]) -> Result<()> {
    std::fs::write(path, data).with_context(|| format!("writing save file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_path_replaces_extension() {
        assert_eq!(
            save_path(Path::new("roms/zelda.gbc")),
            PathBuf::from("roms/zelda.sav")
        );
        assert_eq!(save_path(Path::new("smb3.nes")), PathBuf::from("smb3.sav"));
        assert_eq!(save_path(Path::new("noext")), PathBuf::from("noext.sav"));
    }

    #[test]
    fn missing_save_is_none() {
        let dir = tempdir().unwrap();
        assert!(read_save(&dir.path().join("none.sav")).unwrap().is_none());
    }

    #[test]
    fn bytes_are_written_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("game.sav");
        let data: Vec<u8> = (0..=255).collect();
        write_save(&path, &data).unwrap();
        assert_eq!(read_save(&path).unwrap(), Some(data));
    }
}
