//! Output generation via the external typesetting engine and rasterizer

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

static JOBNAME: &str = "pseudocode";

#[derive(Debug)]
pub enum OutputError {
    Io(PathBuf, std::io::Error),
    Launch(&'static str, std::io::Error),
    Failed(&'static str, Option<i32>),
}

impl OutputError {
    pub fn problem(&self) -> String {
        match self {
            OutputError::Io(_, _) => "Failed writing output".to_string(),
            OutputError::Launch(program, _) => format!("Unable to run {}", program),
            OutputError::Failed(program, _) => format!("{} did not succeed", program),
        }
    }

    pub fn details(&self) -> String {
        match self {
            OutputError::Io(path, error) => format!("{}: {}", path.display(), error),
            OutputError::Launch(_, error) => error.to_string(),
            OutputError::Failed(program, Some(code)) => {
                format!("{} exited with status {}", program, code)
            }
            OutputError::Failed(program, None) => format!("{} was terminated", program),
        }
    }
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem(), self.details())
    }
}

impl std::error::Error for OutputError {}

/// The scratch directory next to the input where intermediate files are
/// written, `.pseudocode/<basename>/`.
pub fn build_directory(filename: &Path) -> PathBuf {
    let parent = filename
        .parent()
        .unwrap_or(Path::new(""));
    let basename = filename
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| JOBNAME.into());

    parent
        .join(".pseudocode")
        .join(basename)
}

fn input_directory(filename: &Path) -> PathBuf {
    let parent = match filename.parent() {
        Some(parent) if !parent
            .as_os_str()
            .is_empty() =>
        {
            parent
        }
        _ => Path::new("."),
    };
    std::fs::canonicalize(parent).unwrap_or_else(|_| parent.to_path_buf())
}

/// Write the complete document into the build directory and compile it with
/// pdflatex, returning the location of the resultant PDF.
pub fn via_pdflatex(filename: &Path, markup: &str) -> Result<PathBuf, OutputError> {
    info!("Typesetting file: {}", filename.display());

    let directory = build_directory(filename);
    std::fs::create_dir_all(&directory)
        .map_err(|error| OutputError::Io(directory.clone(), error))?;

    let source = directory.join(format!("{}.tex", JOBNAME));
    std::fs::write(&source, markup).map_err(|error| OutputError::Io(source.clone(), error))?;

    // the macro package is looked for alongside the input as well
    let package = input_directory(filename);
    let inputs = std::env::join_paths([Path::new("."), package.as_path(), Path::new("")])
        .map_err(|_| OutputError::Io(package.clone(), std::io::ErrorKind::InvalidInput.into()))?;

    let output = Command::new("pdflatex")
        .arg("-halt-on-error")
        .arg(format!("{}.tex", JOBNAME))
        .current_dir(&directory)
        .env("TEXINPUTS", inputs)
        .output()
        .map_err(|error| OutputError::Launch("pdflatex", error))?;

    debug!("Process output: {:?}", output);

    if !output
        .status
        .success()
    {
        return Err(OutputError::Failed(
            "pdflatex",
            output
                .status
                .code(),
        ));
    }

    info!("pdflatex build finished in {}", directory.display());
    Ok(directory.join(format!("{}.pdf", JOBNAME)))
}

/// Rasterize the first page of a PDF to a PNG alongside it.
pub fn rasterize(pdf: &Path) -> Result<PathBuf, OutputError> {
    let directory = pdf
        .parent()
        .unwrap_or(Path::new("."));

    let output = Command::new("pdftoppm")
        .arg("-singlefile")
        .arg("-png")
        .arg(pdf.file_name().unwrap_or_default())
        .arg(JOBNAME)
        .current_dir(directory)
        .output()
        .map_err(|error| OutputError::Launch("pdftoppm", error))?;

    debug!("Process output: {:?}", output);

    if !output
        .status
        .success()
    {
        return Err(OutputError::Failed(
            "pdftoppm",
            output
                .status
                .code(),
        ));
    }

    Ok(directory.join(format!("{}.png", JOBNAME)))
}

/// Move a finished artifact to where the user asked for it.
pub fn deliver(artifact: &Path, target: &Path) -> Result<PathBuf, OutputError> {
    std::fs::rename(artifact, target)
        .map_err(|error| OutputError::Io(target.to_path_buf(), error))?;

    std::fs::canonicalize(target).map_err(|error| OutputError::Io(target.to_path_buf(), error))
}
