#[cfg(test)]
mod tests {
    use crate::error::BlogdexError;
    use crate::header::{RawValue, parse_header};
    use crate::scaffold::{
        CreateOutcome, create_entry, create_year, entry_date, render_template, slugify,
    };
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ========================================================================
    // Slugs
    // ========================================================================

    #[test]
    fn test_slugify() {
        let cases = vec![
            ("Hello World", "hello-world"),
            ("  Rust: Ownership & Borrowing!  ", "rust-ownership-borrowing"),
            ("already-slugged", "already-slugged"),
            ("many   spaces -- and --- dashes", "many-spaces-and-dashes"),
            ("snake_case stays", "snake_case-stays"),
            ("Café au lait", "caf-au-lait"),
            ("2024 in review", "2024-in-review"),
            ("!!!", ""),
        ];

        for (title, expected) in cases {
            assert_eq!(slugify(title), expected, "Failed for {:?}", title);
        }
    }

    // ========================================================================
    // Dates
    // ========================================================================

    #[test]
    fn test_entry_date_validation() {
        assert_eq!(entry_date(2024, 2, 29).unwrap(), ymd(2024, 2, 29));

        let err = entry_date(2024, 13, 1).unwrap_err();
        assert!(matches!(err, BlogdexError::InvalidDate { month: 13, .. }));
        assert_eq!(err.to_string(), "Invalid calendar date: 2024-13-01");
        assert!(entry_date(2023, 2, 29).is_err());
    }

    // ========================================================================
    // Directory scaffolding
    // ========================================================================

    #[test]
    fn test_create_year() {
        let dir = TempDir::new().unwrap();
        let created = create_year(dir.path(), 2025).unwrap();

        assert_eq!(created.len(), 12);
        for month in 1..=12 {
            assert!(dir.path().join("2025").join(format!("{:02}", month)).is_dir());
        }
        assert!(!dir.path().join("2025").join("13").exists());
    }

    #[test]
    fn test_create_year_is_repeatable() {
        let dir = TempDir::new().unwrap();
        create_year(dir.path(), 2025).unwrap();
        fs::write(dir.path().join("2025/03/keep.md"), "keep").unwrap();

        create_year(dir.path(), 2025).unwrap();
        assert!(dir.path().join("2025/03/keep.md").is_file());
    }

    // ========================================================================
    // Entry creation
    // ========================================================================

    #[test]
    fn test_create_entry_writes_template() {
        let dir = TempDir::new().unwrap();
        let outcome = create_entry(dir.path(), ymd(2024, 3, 5), "Hello World").unwrap();

        assert_eq!(
            outcome,
            CreateOutcome::Created("2024/03/05/hello-world.md".to_string())
        );
        let content = fs::read_to_string(dir.path().join("2024/03/05/hello-world.md")).unwrap();
        assert_eq!(content, render_template("Hello World", ymd(2024, 3, 5)));
    }

    #[test]
    fn test_create_entry_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("2024/03/05/hello-world.md");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "my own words").unwrap();

        let outcome = create_entry(dir.path(), ymd(2024, 3, 5), "Hello World").unwrap();
        assert_eq!(
            outcome,
            CreateOutcome::AlreadyExists("2024/03/05/hello-world.md".to_string())
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "my own words");
    }

    #[test]
    fn test_create_entry_rejects_empty_slug() {
        let dir = TempDir::new().unwrap();
        assert!(create_entry(dir.path(), ymd(2024, 3, 5), "???").is_err());
        assert!(!dir.path().join("2024").exists());
    }

    // ========================================================================
    // Template
    // ========================================================================

    #[test]
    fn test_template_header_round_trip() {
        let fields = parse_header(&render_template("Hello World", ymd(2024, 3, 5)));

        assert_eq!(fields.get("title"), Some(&RawValue::Text("Hello World".into())));
        assert_eq!(fields.get("date"), Some(&RawValue::Text("2024-03-05".into())));
        assert_eq!(fields.get("draft"), Some(&RawValue::Bool(false)));
        assert_eq!(fields.get("tags"), Some(&RawValue::List(Vec::new())));
    }

    #[test]
    fn test_template_body() {
        let text = render_template("Hello World", ymd(2024, 3, 5));
        assert!(text.contains("\n# Hello World\n"));
        assert!(text.contains("*Published on March 5, 2024*"));
    }
}
