//! Raw-comment CSV input and output

use crate::StoreError;
use commentscope_domain::Comment;
use std::fs::File;
use std::path::Path;

/// Read the entire raw-comment file into an ordered sequence
///
/// The file is read once, in entirety; row order is preserved.
pub fn read_comments(path: &Path) -> Result<Vec<Comment>, StoreError> {
    let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut comments = Vec::new();
    for row in reader.deserialize() {
        comments.push(row?);
    }
    Ok(comments)
}

/// Write a collected comment set, replacing any existing file
pub fn write_comments(path: &Path, comments: &[Comment]) -> Result<(), StoreError> {
    let file = File::create(path).map_err(|e| StoreError::io(path, e))?;
    let mut writer = csv::Writer::from_writer(file);

    for comment in comments {
        writer.serialize(comment)?;
    }
    writer.flush().map_err(|e| StoreError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use commentscope_domain::Bias;
    use tempfile::TempDir;

    fn sample(id: &str) -> Comment {
        Comment {
            comment_id: id.to_string(),
            body: "A comment body, with a comma".to_string(),
            source: "KARE 11".to_string(),
            bias: Bias::Local,
            score: 7,
            date: "2026-02-01".to_string(),
            video_title: "Coverage \"quoted\"".to_string(),
            author: "someone".to_string(),
        }
    }

    #[test]
    fn test_write_then_read_preserves_order_and_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("raw_data.csv");

        let comments = vec![sample("a"), sample("b"), sample("c")];
        write_comments(&path, &comments).unwrap();

        let loaded = read_comments(&path).unwrap();
        assert_eq!(loaded, comments);
    }

    #[test]
    fn test_read_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = read_comments(&dir.path().join("absent.csv"));
        assert!(matches!(result, Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_unknown_bias_tag_loads_as_unknown() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("raw_data.csv");
        std::fs::write(
            &path,
            "comment_id,body,source,bias,score,date,video_title,author\n\
             x,text,Chan,SOMETHING_NEW,0,2026-01-01,t,a\n",
        )
        .unwrap();

        let loaded = read_comments(&path).unwrap();
        assert_eq!(loaded[0].bias, Bias::Unknown);
    }
}
