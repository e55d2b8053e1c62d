use crate::utils::error::Result;
use base64::{engine::general_purpose, Engine};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// File content as it arrives from a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Standard base64, as passed on the command line.
    Base64(String),
    /// Raw text, as typed into the shell.
    Text(String),
}

impl Payload {
    /// Returns the payload as UTF-8 text. ASCII whitespace inside base64
    /// input is skipped so wrapped payloads decode.
    pub fn decode(&self) -> Result<Cow<'_, str>> {
        match self {
            Payload::Text(text) => Ok(Cow::Borrowed(text)),
            Payload::Base64(encoded) => {
                let compact: String = encoded
                    .chars()
                    .filter(|c| !c.is_ascii_whitespace())
                    .collect();
                let bytes = general_purpose::STANDARD.decode(compact)?;
                Ok(Cow::Owned(String::from_utf8(bytes)?))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    FullReplace,
    SubstringReplace,
    CreateFromInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    FullReplace {
        path: PathBuf,
        content: Payload,
    },
    SubstringReplace {
        path: PathBuf,
        old: Payload,
        new: Payload,
    },
    CreateFile {
        path: PathBuf,
        content: Payload,
    },
}

impl Operation {
    pub fn mode(&self) -> OperationMode {
        match self {
            Operation::FullReplace { .. } => OperationMode::FullReplace,
            Operation::SubstringReplace { .. } => OperationMode::SubstringReplace,
            Operation::CreateFile { .. } => OperationMode::CreateFromInput,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Operation::FullReplace { path, .. }
            | Operation::SubstringReplace { path, .. }
            | Operation::CreateFile { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written { path: PathBuf, bytes: usize },
    Replaced { path: PathBuf, occurrences: usize },
    NotFound { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FileToolError;

    #[test]
    fn test_decode_text_payload_is_borrowed() {
        let payload = Payload::Text("plain | text".to_string());
        assert!(matches!(payload.decode().unwrap(), Cow::Borrowed("plain | text")));
    }

    #[test]
    fn test_decode_base64_payload() {
        // "héllo\nworld"
        let payload = Payload::Base64("aMOpbGxvCndvcmxk".to_string());
        assert_eq!(payload.decode().unwrap(), "héllo\nworld");
    }

    #[test]
    fn test_decode_skips_whitespace_in_base64() {
        let payload = Payload::Base64("aGVs\nbG8g\r\nd29y bGQ=".to_string());
        assert_eq!(payload.decode().unwrap(), "hello world");
    }

    #[test]
    fn test_decode_rejects_malformed_base64() {
        let payload = Payload::Base64("not*base64".to_string());
        assert!(matches!(payload.decode(), Err(FileToolError::DecodeError(_))));
    }

    #[test]
    fn test_decode_rejects_non_utf8() {
        // 0xFF 0xFE
        let payload = Payload::Base64("//4=".to_string());
        assert!(matches!(payload.decode(), Err(FileToolError::Utf8Error(_))));
    }

    #[test]
    fn test_operation_mode_and_path() {
        let op = Operation::SubstringReplace {
            path: PathBuf::from("src/lib.rs"),
            old: Payload::Text("a".into()),
            new: Payload::Text("b".into()),
        };
        assert_eq!(op.mode(), OperationMode::SubstringReplace);
        assert_eq!(op.path(), Path::new("src/lib.rs"));

        let op = Operation::CreateFile {
            path: PathBuf::from("x.txt"),
            content: Payload::Text(String::new()),
        };
        assert_eq!(op.mode(), OperationMode::CreateFromInput);
    }
}
