//! # Reading of network problems
//!
//! This module provides read functionality for files describing the connections of a network.
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::data::network::connection::Connection;
use crate::io::error::ImportError;

pub mod edge_list;
pub mod error;

/// Import the connections of a network from a file.
///
/// Currently only supports edge lists, with extension `txt` or `edges`.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, or a line can't be parsed,
/// an error type is returned.
pub fn import<W: FromStr>(file_path: &Path) -> Result<Vec<Connection<W>>, ImportError> {
    // Choose the right parser
    let parse = match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("txt" | "edges") => edge_list::parse::<W>,
            Some(extension_string) => return Err(ImportError::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path
            ))),
            None => return Err(ImportError::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension
            ))),
        },
        None => return Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path
        ))),
    };

    let program = fs::read_to_string(file_path)?;
    log::debug!("Read {} bytes from {:?}", program.len(), file_path);

    Ok(parse(&program)?)
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use crate::io::error::ImportError;
    use crate::io::import;

    #[test]
    fn unknown_extension() {
        let result = import::<f64>(Path::new("network.mps"));
        assert!(matches!(result, Err(ImportError::FileExtension(_))));

        let result = import::<f64>(Path::new("network"));
        assert!(matches!(result, Err(ImportError::FileExtension(_))));
    }

    #[test]
    fn missing_file() {
        let result = import::<f64>(Path::new("does/not/exist.txt"));
        assert!(matches!(result, Err(ImportError::IO(_))));
    }
}
