use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ArgMatches;
use serde_json::Value;

use crate::error::ExportError;

/// sibling of a destination path "<name>.<pid>.<extension>"
fn sibling_path(filename:&Path, extension:&str) -> PathBuf {
    let mut name = filename.file_name().map(|s| s.to_os_string()).unwrap_or_default();
    name.push(format!(".{}.{}", std::process::id(), extension));
    filename.with_file_name(name)
}

/** temporary sibling of a destination path (same directory, so that the rename stays on one filesystem) */
fn temporary_path(filename:&Path) -> PathBuf {
    sibling_path(filename, "tmp")
}

/// where the previous content of a destination is kept during a grouped write
fn backup_path(filename:&Path) -> PathBuf {
    sibling_path(filename, "bak")
}

/**
writes content into filename. The content is written into a temporary file
which is renamed only once fully written: either the whole file exists or nothing changes.
*/
pub fn write_atomically(filename:&str, content:&str) -> Result<(), ExportError> {
    write_files_atomically(&[(filename, content)])
}

/**
writes several files at once. Every content is first written into a temporary file;
destinations are replaced only if all temporary files were written.
Existing destinations are moved aside before being replaced. If a replacement fails,
the destinations already replaced get their previous content back (or are removed if they
did not exist): either all files are written or none changes.
A destination may appear only once.
*/
pub fn write_files_atomically(files:&[(&str, &str)]) -> Result<(), ExportError> {
    let paths:Vec<&Path> = files.iter().map(|(filename,_)| Path::new(*filename)).collect();
    for (i, path) in paths.iter().enumerate() {
        if paths[..i].contains(path) {
            return Err(ExportError {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "destination given twice"),
            });
        }
    }
    // write the temporary files
    let mut temporaries:Vec<PathBuf> = Vec::with_capacity(files.len());
    for (path, (_, content)) in paths.iter().zip(files) {
        let tmp = temporary_path(path);
        let res = fs::File::create(&tmp).and_then(|mut file| {
            file.write_all(content.as_bytes())?;
            file.sync_all()
        });
        temporaries.push(tmp);
        if let Err(source) = res {
            for t in &temporaries { let _ = fs::remove_file(t); }
            return Err(ExportError { path: path.to_path_buf(), source });
        }
    }
    // move the previous files aside, then the temporary files into place
    let mut backups:Vec<Option<PathBuf>> = Vec::with_capacity(files.len());
    let mut nb_replaced = 0;
    let mut failure:Option<(&Path, io::Error)> = None;
    for (tmp, path) in temporaries.iter().zip(paths.iter()) {
        let backup = if path.is_file() {
            let b = backup_path(path);
            if let Err(source) = fs::rename(path, &b) {
                failure = Some((*path, source));
                break;
            }
            Some(b)
        } else { None };
        backups.push(backup);
        if let Err(source) = fs::rename(tmp, path) {
            failure = Some((*path, source));
            break;
        }
        nb_replaced += 1;
    }
    match failure {
        None => {
            for b in backups.iter().flatten() { let _ = fs::remove_file(b); }
            Ok(())
        },
        Some((path, source)) => {
            for (i, backup) in backups.iter().enumerate() {
                if i < nb_replaced { let _ = fs::remove_file(paths[i]); }
                if let Some(b) = backup { let _ = fs::rename(b, paths[i]); }
            }
            for t in &temporaries { let _ = fs::remove_file(t); }
            Err(ExportError { path: path.to_path_buf(), source })
        }
    }
}

/// exports search statistics (JSON) if a performance file is given
pub fn export_stats(stats:&Value, perf_file:Option<&str>) -> Result<(), ExportError> {
    match perf_file {
        None => Ok(()),
        Some(filename) => write_atomically(filename, &stats.to_string()),
    }
}

/** reads an optional command line value, returns an error message if it cannot be parsed */
pub fn parse_arg<T:FromStr>(main_args:&ArgMatches, name:&str) -> Result<Option<T>, String> {
    match main_args.value_of(name) {
        None => Ok(None),
        Some(s) => s.parse::<T>()
            .map(Some)
            .map_err(|_| format!("unable to parse the value of --{} ('{}')", name, s)),
    }
}

/** reads an optional time limit (seconds). It must be a finite non-negative number. */
pub fn parse_time_limit(main_args:&ArgMatches, name:&str) -> Result<Option<f32>, String> {
    match parse_arg::<f32>(main_args, name)? {
        Some(t) if !t.is_finite() || t < 0. => {
            Err(format!("the value of --{} must be a non-negative number of seconds (got {})", name, t))
        },
        res => Ok(res),
    }
}
