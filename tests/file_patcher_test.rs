use anyhow::Result;
use base64::{engine::general_purpose, Engine};
use filecraft::core::OperationRunner;
use filecraft::{FileOperations, LocalStorage, Operation, Outcome, Payload};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn b64(text: &str) -> Payload {
    Payload::Base64(general_purpose::STANDARD.encode(text))
}

#[tokio::test]
async fn test_write_full_round_trip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let ops = FileOperations::new(LocalStorage::new(temp_dir.path()));

    for content in ["", "single line", "multi\nline\r\nwith ünïcode ✅\n", "   padded   "] {
        ops.write_full(Path::new("round_trip.txt"), content).await?;
        let on_disk = std::fs::read_to_string(temp_dir.path().join("round_trip.txt"))?;
        assert_eq!(on_disk, content);
    }

    Ok(())
}

#[tokio::test]
async fn test_write_full_creates_missing_parents() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let ops = FileOperations::new(LocalStorage::new(temp_dir.path()));

    let outcome = ops
        .execute(Operation::FullReplace {
            path: PathBuf::from("deep/nested/dir/file.js"),
            content: b64("console.log('hi');\n"),
        })
        .await?;

    assert_eq!(
        outcome,
        Outcome::Written {
            path: PathBuf::from("deep/nested/dir/file.js"),
            bytes: 19,
        }
    );
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("deep/nested/dir/file.js"))?,
        "console.log('hi');\n"
    );

    Ok(())
}

#[tokio::test]
async fn test_replace_substring_on_disk() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = temp_dir.path().join("config.js");
    std::fs::write(&file, "const url = 'http://old';\nfetch('http://old/api');\n")?;

    let ops = FileOperations::new(LocalStorage::new(temp_dir.path()));
    let outcome = ops
        .execute(Operation::SubstringReplace {
            path: PathBuf::from("config.js"),
            old: b64("http://old"),
            new: b64("https://new"),
        })
        .await?;

    assert!(matches!(outcome, Outcome::Replaced { occurrences: 2, .. }));
    assert_eq!(
        std::fs::read_to_string(&file)?,
        "const url = 'https://new';\nfetch('https://new/api');\n"
    );

    Ok(())
}

#[tokio::test]
async fn test_replace_substring_missing_file_creates_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let ops = FileOperations::new(LocalStorage::new(temp_dir.path()));

    let outcome = ops
        .execute(Operation::SubstringReplace {
            path: PathBuf::from("missing/file.txt"),
            old: b64("a"),
            new: b64("b"),
        })
        .await?;

    assert_eq!(
        outcome,
        Outcome::NotFound {
            path: PathBuf::from("missing/file.txt")
        }
    );
    assert!(!temp_dir.path().join("missing").exists());

    Ok(())
}

#[tokio::test]
async fn test_replace_substring_absent_pattern_keeps_content() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = temp_dir.path().join("notes.md");
    std::fs::write(&file, "# Title\nbody\n")?;

    let ops = FileOperations::new(LocalStorage::new(temp_dir.path()));
    let outcome = ops
        .replace_substring(Path::new("notes.md"), "absent", "x")
        .await?;

    assert!(matches!(outcome, Outcome::Replaced { occurrences: 0, .. }));
    assert_eq!(std::fs::read_to_string(&file)?, "# Title\nbody\n");

    Ok(())
}

#[tokio::test]
async fn test_malformed_payload_leaves_file_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = temp_dir.path().join("keep.txt");
    std::fs::write(&file, "original")?;

    let ops = FileOperations::new(LocalStorage::new(temp_dir.path()));
    let result = ops
        .execute(Operation::FullReplace {
            path: PathBuf::from("keep.txt"),
            content: Payload::Base64("this is not base64".to_string()),
        })
        .await;

    assert!(result.is_err());
    assert_eq!(std::fs::read_to_string(&file)?, "original");

    Ok(())
}
