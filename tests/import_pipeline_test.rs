//! Integration tests for the import and export pipelines against the
//! in-memory store

use leadbook::adapters::database::LeadStore;
use leadbook::adapters::memory::MemoryLeadStore;
use leadbook::core::export::LeadExporter;
use leadbook::core::import::LeadImporter;
use leadbook::domain::{ImportError, LeadFilter, LeadbookError, NewLead};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn pipeline() -> (Arc<MemoryLeadStore>, LeadImporter, LeadExporter) {
    let store = Arc::new(MemoryLeadStore::new());
    (
        store.clone(),
        LeadImporter::new(store.clone()),
        LeadExporter::new(store),
    )
}

#[tokio::test]
async fn test_unique_rows_all_imported() {
    let (store, importer, _) = pipeline();
    let csv = (0..25)
        .map(|i| format!("Buyer,Number{i},buyer{i}@example.com"))
        .fold("Firstname,Lastname,Email".to_string(), |acc, row| {
            acc + "\n" + &row
        });

    let summary = importer.import_csv(&csv).await.unwrap();

    assert_eq!(summary.imported, 25);
    assert_eq!(summary.skipped, 0);
    assert!(summary.is_complete());
    assert_eq!(store.len().await, 25);
}

#[tokio::test]
async fn test_existing_email_is_skipped() {
    let (store, importer, _) = pipeline();
    store
        .insert(NewLead {
            first_name: "Existing".to_string(),
            last_name: "Lead".to_string(),
            email: "taken@example.com".to_string(),
            status: "contacted".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let csv = "first name,last name,email,status\n\
               New,Lead,fresh@example.com,\n\
               Other,Person,taken@example.com,new";
    let summary = importer.import_csv(csv).await.unwrap();

    assert_eq!(summary.imported, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(
        summary.error_messages(),
        vec!["Row 3: Email taken@example.com already exists"]
    );

    let existing = store
        .find_by_email("taken@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(existing.first_name, "Existing");
    assert_eq!(existing.status, "contacted");
}

#[tokio::test]
async fn test_header_only_rejected_before_any_row() {
    let (store, importer, _) = pipeline();

    let err = importer
        .import_csv("First Name,Last Name,Email\n")
        .await
        .unwrap_err();

    assert!(matches!(err, LeadbookError::Import(ImportError::TooFewLines)));
    assert_eq!(
        err.to_string(),
        "CSV must contain at least a header row and one data row"
    );
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_every_skipped_row_has_one_message() {
    let (_, importer, _) = pipeline();
    let csv = "email,first_name,last_name,budget max\n\
               a@example.com,Ann,One,\"$1,200,000\"\n\
               broken,Bob,Two,\n\
               a@example.com,Ann,Again,\n\
               c@example.com,,Three,\n\
               d@example.com,Dee,Four,900000";

    let summary = importer.import_csv(csv).await.unwrap();

    assert_eq!(summary.imported, 2);
    assert_eq!(summary.skipped, 3);
    assert_eq!(summary.errors.len(), summary.skipped);
    assert_eq!(summary.total_rows(), 5);
    assert_eq!(
        summary.error_messages(),
        vec![
            "Row 3: Invalid email format",
            "Row 4: Email a@example.com already exists",
            "Row 5: Missing required fields",
        ]
    );
}

#[tokio::test]
async fn test_import_file() {
    let (store, importer, _) = pipeline();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "First Name,Last Name,Email Address").unwrap();
    writeln!(file, "Jane,Doe,jane@example.com").unwrap();

    let summary = importer.import_file(file.path()).await.unwrap();
    assert_eq!(summary.imported, 1);
    assert_eq!(store.len().await, 1);

    let err = importer
        .import_file("/nonexistent/leads.csv")
        .await
        .unwrap_err();
    assert!(matches!(err, LeadbookError::Io(_)));

    let empty = NamedTempFile::new().unwrap();
    let err = importer.import_file(empty.path()).await.unwrap_err();
    assert!(matches!(err, LeadbookError::Import(ImportError::TooFewLines)));

    let mut blank = NamedTempFile::new().unwrap();
    writeln!(blank, "   ").unwrap();
    let err = importer.import_file(blank.path()).await.unwrap_err();
    assert!(matches!(err, LeadbookError::Import(ImportError::TooFewLines)));
}

#[tokio::test]
async fn test_export_reimport_into_fresh_store() {
    let (_, importer, exporter) = pipeline();
    let csv = "First Name,Last Name,Email,Company,Budget Min,Location,Notes\n\
               Jane,Doe,jane@example.com,\"Doe, Inc.\",\"$300,000\",\"Austin, TX\",Wants a yard\n\
               John,Roe,john@example.com,,,,";
    importer.import_csv(csv).await.unwrap();

    let export = exporter.export(&LeadFilter::default()).await.unwrap();
    assert_eq!(export.row_count, 2);

    let (fresh, reimporter, _) = pipeline();
    let summary = reimporter.import_csv(&export.body).await.unwrap();
    assert_eq!(summary.imported, 2);

    let jane = fresh
        .find_by_email("jane@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(jane.company.as_deref(), Some("Doe, Inc."));
    assert_eq!(jane.budget_min, Some(300_000));
    assert_eq!(jane.location.as_deref(), Some("Austin, TX"));
    assert_eq!(jane.notes.as_deref(), Some("Wants a yard"));
    assert_eq!(jane.source.as_deref(), Some("import"));

    let john = fresh
        .find_by_email("john@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(john.company, None);
    assert_eq!(john.budget_min, None);
}
