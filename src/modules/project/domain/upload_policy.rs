#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub allowed_mime_types: &'static [(&'static str, &'static str)],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadPolicyError {
    #[error("Unsupported image type")]
    UnsupportedType,

    #[error("Image exceeds the size limit")]
    TooLarge,
}

impl UploadPolicy {
    /// (mime type, file extension) pairs accepted for project images.
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [(&'static str, &'static str)] = &[
        ("image/jpeg", "jpg"),
        ("image/png", "png"),
        ("image/webp", "webp"),
    ];

    pub fn new() -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024, // 5MB
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }

    /// Validate an upload and return the extension to store it under.
    pub fn check(&self, content_type: &str, size: u64) -> Result<&'static str, UploadPolicyError> {
        let extension = self
            .allowed_mime_types
            .iter()
            .find(|(mime, _)| *mime == content_type)
            .map(|(_, ext)| *ext)
            .ok_or(UploadPolicyError::UnsupportedType)?;

        if size > self.max_file_size_bytes {
            return Err(UploadPolicyError::TooLarge);
        }

        Ok(extension)
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new()
    }
}
