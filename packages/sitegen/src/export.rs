//! Archive export: a site as a three-file zip.
//!
//! Uses the same file naming the Netlify payload uses (`index.html`,
//! `styles.css`, `script.js`), so an exported archive is exactly what
//! provider uploads contain.

use std::io::{Cursor, Read, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::{Result, SitegenError};
use crate::types::site::{GeneratedSite, INDEX_FILE, SCRIPT_FILE, STYLES_FILE};

fn archive_err(e: impl std::error::Error + Send + Sync + 'static) -> SitegenError {
    SitegenError::Archive(Box::new(e))
}

/// Package a site into zip bytes.
pub fn write_archive(site: &GeneratedSite) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut writer = ZipWriter::new(&mut buf);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for (name, content) in site.files() {
            writer.start_file(name, options).map_err(archive_err)?;
            writer.write_all(content.as_bytes()).map_err(archive_err)?;
        }

        writer.finish().map_err(archive_err)?;
    }
    Ok(buf.into_inner())
}

/// Read a site back out of zip bytes.
///
/// Missing entries default to empty strings; entries with other names are
/// ignored. Round-tripping through [`write_archive`] reproduces the site
/// byte for byte.
pub fn read_archive(bytes: &[u8]) -> Result<GeneratedSite> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(archive_err)?;
    let mut site = GeneratedSite::default();

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(archive_err)?;
        let name = entry.name().to_string();

        let mut content = String::new();
        entry.read_to_string(&mut content).map_err(archive_err)?;

        match name.as_str() {
            INDEX_FILE => site.html = content,
            STYLES_FILE => site.css = content,
            SCRIPT_FILE => site.js = content,
            _ => {}
        }
    }

    Ok(site)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_is_byte_exact() {
        let site = GeneratedSite::new(
            "<!DOCTYPE html>\n<html><body>héllo</body></html>",
            "body { margin: 0; }\n",
            "document.addEventListener('DOMContentLoaded', () => {});",
        );

        let bytes = write_archive(&site).unwrap();
        let restored = read_archive(&bytes).unwrap();

        assert_eq!(restored, site);
    }

    #[test]
    fn test_empty_fields_survive_round_trip() {
        let site = GeneratedSite::new("<p>only markup</p>", "", "");

        let restored = read_archive(&write_archive(&site).unwrap()).unwrap();
        assert_eq!(restored, site);
    }

    #[test]
    fn test_garbage_bytes_are_an_archive_error() {
        let err = read_archive(b"definitely not a zip").unwrap_err();
        assert!(matches!(err, SitegenError::Archive(_)));
    }
}
