use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::store::Stores;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

pub struct BackupLogic;

impl BackupLogic {
    /// Copy both data files into `dest_dir`.
    ///
    /// With `compress` a single archive is produced instead: `.zip` on
    /// Windows, `.tar.gz` elsewhere. Returns the paths written.
    pub fn backup(
        stores: &Stores,
        dest_dir: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Vec<PathBuf>> {
        let dest = Path::new(dest_dir);
        if !dest.is_absolute() {
            return Err(AppError::Other(format!(
                "Backup directory must be absolute: {dest_dir}"
            )));
        }

        let sources = [stores.roster.path(), stores.attendance.path()];
        for src in sources {
            if !src.exists() {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("Data file not found: {}", src.display()),
                )
                .into());
            }
        }

        fs::create_dir_all(dest)?;

        let written = if compress {
            let stamp = Local::now().format("%Y%m%d_%H%M%S");
            let archive = dest.join(format!("messlog_backup_{stamp}.{}", archive_ext()));
            ensure_writable(&archive, force)?;
            compress_backup(&sources, &archive)?;
            vec![archive]
        } else {
            let mut out = Vec::new();
            for src in sources {
                let target = dest.join(file_name(src)?);
                ensure_writable(&target, force)?;
                fs::copy(src, &target)?;
                out.push(target);
            }
            out
        };

        let listed: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();
        stores.ttlog(
            "backup",
            dest_dir,
            &if compress {
                format!("Backup created and compressed: {}", listed.join(", "))
            } else {
                format!("Backup created: {}", listed.join(", "))
            },
        );

        Ok(written)
    }
}

fn file_name(path: &Path) -> AppResult<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("Invalid data file path: {}", path.display())))
}

#[cfg(target_os = "windows")]
fn archive_ext() -> &'static str {
    "zip"
}

#[cfg(not(target_os = "windows"))]
fn archive_ext() -> &'static str {
    "tar.gz"
}

/// Pack the data files into a .zip archive.
#[cfg(target_os = "windows")]
fn compress_backup(sources: &[&Path], archive: &Path) -> AppResult<()> {
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let file = fs::File::create(archive)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for src in sources {
        let mut f = fs::File::open(src)?;
        zip.start_file(file_name(src)?, options)
            .map_err(std::io::Error::other)?;
        std::io::copy(&mut f, &mut zip)?;
    }

    zip.finish().map_err(std::io::Error::other)?;
    Ok(())
}

/// Pack the data files into a .tar.gz archive.
#[cfg(not(target_os = "windows"))]
fn compress_backup(sources: &[&Path], archive: &Path) -> AppResult<()> {
    use flate2::Compression;
    use flate2::write::GzEncoder;

    let file = fs::File::create(archive)?;
    let enc = GzEncoder::new(file, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for src in sources {
        tar.append_path_with_name(src, file_name(src)?)?;
    }

    tar.into_inner()?.finish()?;
    Ok(())
}
