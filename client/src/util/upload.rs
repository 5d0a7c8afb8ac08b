//! Client-side checks for the CSV upload form.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Reject anything that is not a `.csv` file before uploading.
///
/// # Errors
///
/// Returns the inline message to show.
pub fn validate_csv_filename(name: &str) -> Result<(), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Please select a file to upload.");
    }
    let lower = name.to_ascii_lowercase();
    match lower.rsplit_once('.') {
        Some((stem, "csv")) if !stem.is_empty() => Ok(()),
        _ => Err("Invalid file type. Please select a .csv file."),
    }
}

/// Every selection the upload button needs.
pub fn can_upload(project: Option<&str>, interface: Option<&str>, filename: Option<&str>, uploading: bool) -> bool {
    !uploading
        && project.is_some_and(|p| !p.is_empty())
        && interface.is_some_and(|i| !i.is_empty())
        && filename.is_some_and(|f| validate_csv_filename(f).is_ok())
}
