pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use patch_args::{PatchArgs, USAGE};

#[cfg(feature = "cli")]
mod patch_args {
    use crate::domain::model::{Operation, Payload};
    use crate::utils::error::{FileToolError, Result};
    use crate::utils::validation::validate_non_empty_string;
    use clap::Parser;
    use std::path::PathBuf;

    pub const USAGE: &str = "Usage:
  filecraft <file_path> --replace-all <base64_content>
  filecraft <file_path> --replace <base64_old_text> <base64_new_text>";

    #[derive(Debug, Clone, Parser)]
    #[command(name = "filecraft")]
    #[command(about = "Overwrite or patch a text file from base64 payloads")]
    #[command(override_usage = "filecraft <FILE_PATH> (--replace-all <BASE64_CONTENT> | --replace <BASE64_OLD> <BASE64_NEW>)")]
    pub struct PatchArgs {
        /// File to write or patch
        pub file_path: String,

        /// Replace the whole file with the decoded content
        #[arg(long = "replace-all", value_name = "BASE64_CONTENT", conflicts_with = "replace")]
        pub replace_all: Option<String>,

        /// Replace every occurrence of the decoded old text with the decoded new text
        #[arg(long, num_args = 2, value_names = ["BASE64_OLD", "BASE64_NEW"])]
        pub replace: Option<Vec<String>>,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl PatchArgs {
        /// Builds the operation; payloads stay encoded until the operation runs.
        pub fn operation(&self) -> Result<Operation> {
            validate_non_empty_string("file_path", &self.file_path).map_err(|e| {
                FileToolError::InvalidArguments {
                    message: e.user_friendly_message(),
                }
            })?;
            let path = PathBuf::from(&self.file_path);

            match (&self.replace_all, &self.replace) {
                (Some(content), None) => Ok(Operation::FullReplace {
                    path,
                    content: Payload::Base64(content.clone()),
                }),
                (None, Some(pair)) => match pair.as_slice() {
                    [old, new] => Ok(Operation::SubstringReplace {
                        path,
                        old: Payload::Base64(old.clone()),
                        new: Payload::Base64(new.clone()),
                    }),
                    _ => Err(FileToolError::InvalidArguments {
                        message: "--replace takes exactly two payloads".to_string(),
                    }),
                },
                _ => Err(FileToolError::InvalidArguments {
                    message: "expected exactly one of --replace-all or --replace".to_string(),
                }),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::model::OperationMode;

        #[test]
        fn test_parse_replace_all() {
            let args =
                PatchArgs::try_parse_from(["filecraft", "notes.txt", "--replace-all", "aGk="])
                    .unwrap();
            let op = args.operation().unwrap();

            assert_eq!(op.mode(), OperationMode::FullReplace);
            assert_eq!(
                op,
                Operation::FullReplace {
                    path: PathBuf::from("notes.txt"),
                    content: Payload::Base64("aGk=".to_string()),
                }
            );
        }

        #[test]
        fn test_parse_replace() {
            let args = PatchArgs::try_parse_from([
                "filecraft",
                "src/app.js",
                "--replace",
                "b2xk",
                "bmV3",
            ])
            .unwrap();

            assert_eq!(
                args.operation().unwrap(),
                Operation::SubstringReplace {
                    path: PathBuf::from("src/app.js"),
                    old: Payload::Base64("b2xk".to_string()),
                    new: Payload::Base64("bmV3".to_string()),
                }
            );
        }

        #[test]
        fn test_missing_mode_is_invalid() {
            let args = PatchArgs::try_parse_from(["filecraft", "notes.txt"]).unwrap();
            assert!(matches!(
                args.operation(),
                Err(FileToolError::InvalidArguments { .. })
            ));
        }

        #[test]
        fn test_blank_path_is_invalid() {
            let args =
                PatchArgs::try_parse_from(["filecraft", "  ", "--replace-all", "aGk="]).unwrap();
            assert!(matches!(
                args.operation(),
                Err(FileToolError::InvalidArguments { .. })
            ));
        }

        #[test]
        fn test_other_shapes_are_rejected() {
            assert!(PatchArgs::try_parse_from(["filecraft"]).is_err());
            assert!(PatchArgs::try_parse_from(["filecraft", "f.txt", "--replace", "b2xk"]).is_err());
            assert!(PatchArgs::try_parse_from([
                "filecraft",
                "f.txt",
                "--replace-all",
                "aGk=",
                "--replace",
                "b2xk",
                "bmV3",
            ])
            .is_err());
            assert!(PatchArgs::try_parse_from(["filecraft", "f.txt", "--append", "aGk="]).is_err());
        }
    }
}
