//! Plain-text implementation of the avoidance repository.
//!
//! Two files are kept side by side: a concise file with one digit key per line,
//! which is the only file ever read back, and a verbose file with the same keys
//! rendered as `(row,column)` pairs for people to read.

use std::{
    fs::{self, File},
    io::{BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{
    Result, error::Error, memory::AvoidanceSet, ports::AvoidanceRepository, types::MoveKey,
};

/// Default concise storage file name.
pub const DEFAULT_CONCISE_FILE: &str = "tttConcise.log";

/// Default verbose storage file name.
pub const DEFAULT_VERBOSE_FILE: &str = "tttVerbose.log";

/// Text-file avoidance repository.
///
/// Every save rewrites both files in full. Each file is first written to a
/// sibling temporary file and then renamed over the old one, so a crash
/// mid-write leaves the previous contents intact.
///
/// # Examples
///
/// ```no_run
/// use recall::adapters::TextFileRepository;
/// use recall::ports::AvoidanceRepository;
///
/// let repo = TextFileRepository::new("tttConcise.log", "tttVerbose.log");
/// let keys = repo.load()?;
/// repo.save(&keys)?;
/// # Ok::<(), recall::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFileRepository {
    concise_path: PathBuf,
    verbose_path: PathBuf,
}

impl TextFileRepository {
    pub fn new(concise_path: impl Into<PathBuf>, verbose_path: impl Into<PathBuf>) -> Self {
        Self {
            concise_path: concise_path.into(),
            verbose_path: verbose_path.into(),
        }
    }

    pub fn concise_path(&self) -> &Path {
        &self.concise_path
    }

    pub fn verbose_path(&self) -> &Path {
        &self.verbose_path
    }

    /// Write `keys` to the temporary sibling of `path`, returning its path.
    ///
    /// The temporary file is removed again if any write fails.
    fn write_temp(
        path: &Path,
        keys: &AvoidanceSet,
        render: impl Fn(&MoveKey) -> String,
    ) -> Result<PathBuf> {
        let temp_path = temp_path_for(path);

        let file = File::create(&temp_path).map_err(|source| Error::Io {
            operation: format!("create file {temp_path:?}"),
            source,
        })?;
        let written = write_lines(BufWriter::new(file), keys, render);
        if let Err(source) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(Error::Io {
                operation: format!("write to {temp_path:?}"),
                source,
            });
        }
        Ok(temp_path)
    }
}

fn write_lines(
    mut writer: impl Write,
    keys: &AvoidanceSet,
    render: impl Fn(&MoveKey) -> String,
) -> std::io::Result<()> {
    for key in keys {
        writeln!(writer, "{}", render(key))?;
    }
    writer.flush()
}

fn replace_with(temp_path: &Path, path: &Path) -> Result<()> {
    fs::rename(temp_path, path).map_err(|source| {
        let _ = fs::remove_file(temp_path);
        Error::Io {
            operation: format!("replace {path:?}"),
            source,
        }
    })
}

impl Default for TextFileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_CONCISE_FILE, DEFAULT_VERBOSE_FILE)
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

impl AvoidanceRepository for TextFileRepository {
    fn load(&self) -> Result<AvoidanceSet> {
        let bytes = match fs::read(&self.concise_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = ?self.concise_path, "no avoidance file yet");
                return Ok(AvoidanceSet::new());
            }
            Err(source) => {
                return Err(Error::Io {
                    operation: format!("read file {:?}", self.concise_path),
                    source,
                });
            }
        };

        // Lines that are not UTF-8 are malformed keys like any other.
        let lines = bytes
            .split(|&byte| byte == b'\n')
            .enumerate()
            .filter_map(|(line_no, raw)| match std::str::from_utf8(raw) {
                Ok(line) => Some(line),
                Err(_) => {
                    warn!(line = line_no + 1, "skipping stored key that is not UTF-8");
                    None
                }
            });

        Ok(AvoidanceSet::from_lines(lines))
    }

    fn save(&self, keys: &AvoidanceSet) -> Result<()> {
        // Both files are fully written before either is replaced.
        let concise_temp = Self::write_temp(&self.concise_path, keys, |key| key.to_string())?;
        let verbose_temp = match Self::write_temp(&self.verbose_path, keys, |key| key.verbose()) {
            Ok(path) => path,
            Err(e) => {
                let _ = fs::remove_file(&concise_temp);
                return Err(e);
            }
        };

        if let Err(e) = replace_with(&concise_temp, &self.concise_path) {
            let _ = fs::remove_file(&verbose_temp);
            return Err(e);
        }
        replace_with(&verbose_temp, &self.verbose_path)?;
        debug!(keys = keys.len(), path = ?self.concise_path, "saved avoidance set");
        Ok(())
    }
}
