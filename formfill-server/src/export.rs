//! Plain-text export of a single submission
//!
//! Every export writes to its own uniquely named file in the export
//! directory and reads it back; the file is removed before `export`
//! returns, on success and on error alike.

use std::path::{Path, PathBuf};

use crate::models::ValidSubmission;

/// Filename offered to the client in `Content-Disposition`
pub const EXPORT_FILENAME: &str = "form_data.txt";

/// Export error type
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("export I/O error in {}: {source}", .dir.display())]
    Io {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render the four labelled lines, in form order.
///
/// # Example
/// ```
/// use formfill_server::export::render;
/// use formfill_server::models::{FormSubmission, ValidSubmission};
///
/// let form = FormSubmission {
///     name: Some("A".into()),
///     email: Some("a@x.com".into()),
///     country_code: Some("+1".into()),
///     phone: Some("555".into()),
/// };
/// let valid = ValidSubmission::try_from(form).unwrap();
/// assert_eq!(
///     render(&valid),
///     "Name: A\nEmail: a@x.com\nCountry Code: +1\nPhone: 555\n"
/// );
/// ```
pub fn render(submission: &ValidSubmission) -> String {
    format!(
        "Name: {}\nEmail: {}\nCountry Code: {}\nPhone: {}\n",
        submission.name.as_str(),
        submission.email.as_str(),
        submission.country_code.as_str(),
        submission.phone.as_str(),
    )
}

/// Writes exports into a directory of per-request temp files
#[derive(Debug, Clone)]
pub struct Exporter {
    dir: PathBuf,
}

impl Exporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Exporter rooted in the system temp directory
    pub fn system_temp() -> Self {
        Self::new(std::env::temp_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `submission` to a fresh temp file and return its bytes.
    pub async fn export(&self, submission: &ValidSubmission) -> Result<Vec<u8>, ExportError> {
        let io_err = |source: std::io::Error| ExportError::Io {
            dir: self.dir.clone(),
            source,
        };

        tokio::fs::create_dir_all(&self.dir).await.map_err(io_err)?;

        // Dropping `file` on any early return deletes it
        let dir = self.dir.clone();
        let file = blocking(move || {
            tempfile::Builder::new()
                .prefix("form_data-")
                .suffix(".txt")
                .tempfile_in(dir)
        })
        .await
        .map_err(io_err)?;

        tracing::debug!(path = %file.path().display(), "Writing export");
        tokio::fs::write(file.path(), render(submission))
            .await
            .map_err(io_err)?;
        let bytes = tokio::fs::read(file.path()).await.map_err(io_err)?;

        blocking(move || file.close()).await.map_err(io_err)?;
        Ok(bytes)
    }
}

/// Run a blocking filesystem call off the async workers.
async fn blocking<T, F>(f: F) -> std::io::Result<T>
where
    F: FnOnce() -> std::io::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(std::io::Error::other)?
}

impl Default for Exporter {
    fn default() -> Self {
        Self::system_temp()
    }
}
