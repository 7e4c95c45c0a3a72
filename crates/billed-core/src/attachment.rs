//! Justificatory file checks
//!
//! Only images are accepted as proof. The check runs on the file name before
//! anything is read or uploaded.

use crate::error::AttachmentError;

/// Extensions accepted for a justificatory, lowercase
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Value of the `accept` attribute on the file input
pub const ACCEPT_ATTRIBUTE: &str = ".jpg,.jpeg,.png";

/// Lowercased suffix after the last `.`, if any
pub fn file_extension(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Last path segment of an input value such as `C:\fakepath\ticket.jpg`
pub fn file_name_from_path(value: &str) -> &str {
    value.rsplit(['\\', '/']).next().unwrap_or(value)
}

/// Check a file name against [`ACCEPTED_EXTENSIONS`]
///
/// Returns the normalized extension on success.
pub fn validate_file_name(file_name: &str) -> Result<String, AttachmentError> {
    let ext = file_extension(file_name).ok_or(AttachmentError::MissingExtension)?;
    if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(AttachmentError::UnsupportedExtension(ext))
    }
}

pub fn is_accepted(file_name: &str) -> bool {
    validate_file_name(file_name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_images() {
        assert_eq!(validate_file_name("file.jpg").unwrap(), "jpg");
        assert_eq!(validate_file_name("file.jpeg").unwrap(), "jpeg");
        assert_eq!(validate_file_name("file.png").unwrap(), "png");
        assert_eq!(validate_file_name("SCAN.PNG").unwrap(), "png");
        assert_eq!(validate_file_name("ticket.2024.JpEg").unwrap(), "jpeg");
    }

    #[test]
    fn test_rejects_other_files() {
        assert_eq!(
            validate_file_name("file.pdf"),
            Err(AttachmentError::UnsupportedExtension("pdf".to_string()))
        );
        assert_eq!(
            validate_file_name("file.png.exe"),
            Err(AttachmentError::UnsupportedExtension("exe".to_string()))
        );
        assert_eq!(
            validate_file_name("README"),
            Err(AttachmentError::MissingExtension)
        );
        assert_eq!(
            validate_file_name("trailing."),
            Err(AttachmentError::MissingExtension)
        );
    }

    #[test]
    fn test_file_name_from_path() {
        assert_eq!(file_name_from_path("C:\\fakepath\\ticket.jpg"), "ticket.jpg");
        assert_eq!(file_name_from_path("/tmp/scan.png"), "scan.png");
        assert_eq!(file_name_from_path("plain.jpeg"), "plain.jpeg");
    }

    proptest! {
        #[test]
        fn accepted_extensions_in_any_case(
            stem in "[a-zA-Z0-9_-]{1,20}",
            ext in prop_oneof![Just("jpg"), Just("jpeg"), Just("png")],
            upper in proptest::collection::vec(any::<bool>(), 4),
        ) {
            let mixed: String = ext
                .chars()
                .zip(upper.iter().cycle())
                .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
                .collect();
            let name = format!("{}.{}", stem, mixed);
            prop_assert!(is_accepted(&name), "{} should be accepted", name);
        }

        #[test]
        fn other_extensions_rejected(
            stem in "[^/\\\\]{1,20}",
            ext in prop_oneof![
                "[a-zA-Z0-9]{1,6}",
                "[^./\\\\]{1,8}",
                "[éèàüßøñ€ğıİ-]{1,4}",
                "[ !?*#%&()+,;=@\\[\\]{}~]{1,4}",
            ],
        ) {
            let lower = ext.to_ascii_lowercase();
            prop_assume!(!ACCEPTED_EXTENSIONS.contains(&lower.as_str()));
            let name = format!("{}.{}", stem, ext);
            prop_assert!(!is_accepted(&name), "{:?} should be rejected", name);
        }

        #[test]
        fn names_without_dot_rejected(name in "[^.]{0,20}") {
            prop_assert!(!is_accepted(&name), "{:?} should be rejected", name);
        }
    }
}
