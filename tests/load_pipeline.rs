// tests/load_pipeline.rs
//
// File → canonical RecordSet, including cache behaviour and load failures.
mod common;

use std::fs;
use std::sync::Arc;

use foreclosures::config::options::{LoadOptions, ZipPolicy};
use foreclosures::loader::{DatasetLoader, MemoryCache, NoCache};
use foreclosures::table::Value;
use foreclosures::LoadError;

use common::*;

#[test]
fn pipeline_types_addresses_and_years() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "foreclosures.csv");

    let data = DatasetLoader::new().load_path(&path).unwrap();
    let r = data.records();
    assert_eq!(r.len(), 4);

    assert_eq!(r[0].id, Some(0));
    assert_eq!(r[0].address, "123 Main St");
    assert_eq!(r[0].zip, Some(40202));
    assert_eq!(r[0].case_style.as_deref(), Some("Bank v. Doe, John"));
    assert_eq!(r[0].action_filed, ymd(2020, 1, 5));
    assert_eq!(r[0].sale_date, ymd(2020, 9, 30));
    assert_eq!(r[0].action_year, Some(2020));

    assert_eq!(r[1].address, "45 N Fourth");
    assert_eq!(r[1].zip, None);
    assert_eq!(r[1].sale_date, None);
    assert_eq!(r[1].purchaser, None);

    assert_eq!(r[2].address, "9 Oak Ave");
    assert_eq!(r[2].action_year, Some(2021));

    // Unparsable filing date: null date, null year, empty address
    assert_eq!(r[3].address, "");
    assert_eq!(r[3].action_filed, None);
    assert_eq!(r[3].action_year, None);
    assert_eq!(r[3].neighborhood, None);
}

#[test]
fn unnamed_columns_survive_as_extras() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "extras.csv");
    let data = DatasetLoader::with_cache(NoCache).load_path(&path).unwrap();

    assert_eq!(
        data.extra_headers(),
        ["L_S", "CD", "Census_Tract", "Case_", "Post_Dir", "Sale_Price", "ObjectId"]
    );
    let r = &data.records()[2];
    assert_eq!(r.extras[0], Value::Null); // "x" in an int column
    assert_eq!(r.extras[3], Value::Text("21CI003".into()));
    assert_eq!(r.extras[4], Value::Null); // present but empty
    assert_eq!(r.extras[5], Value::Int(99000));

    // Entirely empty row still carries every column
    assert!(data.records().iter().all(|r| r.extras.len() == 7));
}

#[test]
fn addresses_never_have_double_spaces() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "spaces.csv");
    let data = DatasetLoader::with_cache(NoCache).load_path(&path).unwrap();
    for r in data.iter() {
        assert!(!r.address.contains("  "), "{:?}", r.address);
        assert_eq!(r.address.trim(), r.address);
        assert!(!r.address.contains("<NA>") && !r.address.contains("nan"));
    }
}

#[test]
fn zero_fill_policy_replaces_null_zips() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "zip.csv");
    let opts = LoadOptions { source: path, zip_policy: ZipPolicy::ZeroFill };
    let data = DatasetLoader::with_cache(NoCache).load(&opts).unwrap();
    let zips: Vec<Option<i64>> = data.iter().map(|r| r.zip).collect();
    assert_eq!(zips, vec![Some(40202), Some(0), Some(40205), Some(0)]);
}

#[test]
fn repeated_loads_share_one_parse() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "cached.csv");
    let loader = DatasetLoader::new();

    let a = loader.load_path(&path).unwrap();
    // Second call must not touch the file at all
    fs::remove_file(&path).unwrap();
    let b = loader.load_path(&path).unwrap();

    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(*a, *b);
}

#[test]
fn changing_source_invalidates_cache() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_fixture(dir.path(), "first.csv");
    let second = write_fixture(dir.path(), "second.csv");
    let loader = DatasetLoader::with_cache(MemoryCache::new());

    let a = loader.load_path(&first).unwrap();
    let b = loader.load_path(&second).unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(*a, *b);
    assert_eq!(loader.cache().cached_key().map(|k| k.source), Some(second.clone()));

    // Back to the first source: it was dropped, so this is a fresh parse
    let c = loader.load_path(&first).unwrap();
    assert!(!Arc::ptr_eq(&a, &c));

    loader.invalidate();
    assert_eq!(loader.cache().cached_key(), None);
}

#[test]
fn no_cache_always_reparses() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "nocache.csv");
    let loader = DatasetLoader::with_cache(NoCache);
    let a = loader.load_path(&path).unwrap();
    let b = loader.load_path(&path).unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(*a, *b);
}

#[test]
fn concurrent_loads_resolve_to_one_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "threads.csv");
    let loader = DatasetLoader::new();

    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8).map(|_| s.spawn(|| loader.load_path(&path).unwrap())).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(results.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DatasetLoader::new().load_path(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }), "{err}");
}

#[test]
fn empty_file_has_no_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "").unwrap();
    let err = DatasetLoader::new().load_path(&path).unwrap_err();
    assert!(matches!(err, LoadError::Empty(_)), "{err}");
}

#[test]
fn wrong_header_is_schema_error() {
    let dir = tempfile::tempdir().unwrap();

    let mut header = HEADER;
    header[8] = "Area";
    let renamed = dir.path().join("renamed.csv");
    fs::write(&renamed, csv_text(&header, &ROWS)).unwrap();
    match DatasetLoader::new().load_path(&renamed) {
        Err(LoadError::ColumnName { index, expected, found }) => {
            assert_eq!(index, 8);
            assert_eq!(expected, "Neighborhood");
            assert_eq!(found, "Area");
        }
        other => panic!("unexpected: {other:?}"),
    }

    let short = dir.path().join("short.csv");
    fs::write(&short, "House_Nr,Dir\n1,N\n").unwrap();
    assert!(matches!(
        DatasetLoader::new().load_path(&short),
        Err(LoadError::ColumnCount { expected: 18, found: 2 })
    ));
}

#[test]
fn header_only_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("header_only.csv");
    fs::write(&path, csv_text(&HEADER, &[])).unwrap();
    let data = DatasetLoader::new().load_path(&path).unwrap();
    assert!(data.is_empty());
}
