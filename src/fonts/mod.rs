//! Font resolution for the PDF renderer.
//!
//! genpdf needs a TTF font family on disk. The files are looked up in the
//! `SALES_REPORT_FONTS_DIR` environment variable, then in `assets/fonts`
//! next to the running binary, then in `assets/fonts` of this crate's
//! manifest directory. See `assets/fonts/README.md` for setup.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::Error;
use genpdf::fonts::{self, FontData, FontFamily};

/// Name of the bundled font family.
pub const FONT_FAMILY_NAME: &str = "Roboto";

/// Environment variable that overrides the font search path.
pub const FONTS_DIR_ENV: &str = "SALES_REPORT_FONTS_DIR";

const FONT_FILES: &[&str] = &[
    "Roboto-Regular.ttf",
    "Roboto-Bold.ttf",
    "Roboto-Italic.ttf",
    "Roboto-BoldItalic.ttf",
];

fn candidate_directories() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(path) = env::var(FONTS_DIR_ENV) {
        if !path.trim().is_empty() {
            candidates.push(PathBuf::from(path));
        }
    }

    if let Ok(current_exe) = env::current_exe() {
        if let Some(bin_dir) = current_exe.parent() {
            let candidate = bin_dir.join("assets/fonts");
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }
    }

    let manifest_candidate = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts");
    if !candidates.contains(&manifest_candidate) {
        candidates.push(manifest_candidate);
    }

    candidates
}

fn missing_font_files(directory: &Path) -> Vec<PathBuf> {
    FONT_FILES
        .iter()
        .map(|name| directory.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect()
}

fn resolve_font_directory() -> Result<PathBuf, Error> {
    let mut attempts = Vec::new();

    for candidate in candidate_directories() {
        if candidate.is_dir() && missing_font_files(&candidate).is_empty() {
            return Ok(candidate);
        }

        let reason = if !candidate.is_dir() {
            "directory missing".to_owned()
        } else {
            let missing = missing_font_files(&candidate)
                .iter()
                .map(|path| path.file_name().unwrap_or_default().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(", ");
            format!("missing files [{missing}]")
        };
        attempts.push(format!("{} ({reason})", candidate.display()));
    }

    Err(Error::new(
        format!(
            "Unable to locate report fonts. Checked: {}. See assets/fonts/README.md or set {}.",
            attempts.join(", "),
            FONTS_DIR_ENV
        ),
        io::Error::new(io::ErrorKind::NotFound, "report fonts not found"),
    ))
}

/// Loads the report font family from the first complete candidate directory.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    let directory = resolve_font_directory()?;

    fonts::from_files(&directory, FONT_FAMILY_NAME, None).map_err(|err| {
        Error::new(
            format!(
                "Failed to load font family '{}' from {}: {}",
                FONT_FAMILY_NAME,
                directory.display(),
                err
            ),
            io::Error::new(io::ErrorKind::Other, err.to_string()),
        )
    })
}

/// Indicates whether a complete font directory is available.
///
/// Rendering tests consult this to skip instead of failing on machines
/// without the font assets.
pub fn default_fonts_available() -> bool {
    resolve_font_directory().is_ok()
}
