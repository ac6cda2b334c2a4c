use bookshelf_catalog::*;
use tempfile::TempDir;

#[test]
fn mutations_persist_immediately() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("library.json");

    let mut library = Library::open(&path).unwrap();
    assert!(library.is_empty());
    library
        .add(NewBook::new("Dune", "Frank Herbert", 1965, "Science Fiction", true))
        .unwrap();
    library
        .add(NewBook::new("Emma", "Jane Austen", 1815, "Novel", false))
        .unwrap();

    let reopened = Library::open(&path).unwrap();
    assert_eq!(reopened.books(), library.books());
    assert_eq!(reopened.len(), 2);

    let removed = library.remove("DUNE").unwrap();
    assert_eq!(removed, 1);
    let reopened = Library::open(&path).unwrap();
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.books()[0].title, "Emma");
}

#[test]
fn remove_nothing_still_succeeds() {
    let tmp = TempDir::new().unwrap();
    let mut library = Library::open(tmp.path().join("library.json")).unwrap();
    library
        .add(NewBook::new("Emma", "Jane Austen", 1815, "Novel", false))
        .unwrap();

    assert_eq!(library.remove("Nonexistent").unwrap(), 0);
    assert_eq!(library.len(), 1);
}

#[test]
fn rejected_add_leaves_file_untouched() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("library.json");
    let mut library = Library::open(&path).unwrap();

    let err = library
        .add(NewBook::new("", "Nobody", 2000, "Essay", false))
        .unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Validation(ValidationError::EmptyField("title"))
    ));
    assert!(library.is_empty());
    assert!(!path.exists());
}

#[test]
fn open_surfaces_corrupt_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("library.json");
    std::fs::write(&path, "not json").unwrap();

    let err = Library::open(&path).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Persistence(PersistenceError::Parse { .. })
    ));
}

#[test]
fn search_and_statistics_delegate_to_collection() {
    let tmp = TempDir::new().unwrap();
    let mut library = Library::open(tmp.path().join("library.json")).unwrap();
    library
        .add(NewBook::new("Dune", "Frank Herbert", 1965, "Science Fiction", true))
        .unwrap();
    library
        .add(NewBook::new("Foundation", "Isaac Asimov", 1951, "Science Fiction", false))
        .unwrap();

    let hits = library.search("frank");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Dune");

    let stats = library.statistics();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.percent_read, 50.0);
}

#[test]
fn failed_save_rolls_back_add() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();

    let mut library = Library::open(blocker.join("library.json")).unwrap();
    let err = library
        .add(NewBook::new("Dune", "Frank Herbert", 1965, "Science Fiction", true))
        .unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Persistence(PersistenceError::Write { .. })
    ));
    assert!(library.is_empty());
}

#[test]
fn failed_save_rolls_back_remove() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("library.json");
    let mut library = Library::open(&path).unwrap();
    library
        .add(NewBook::new("Dune", "Frank Herbert", 1965, "Science Fiction", true))
        .unwrap();

    // Swap the file for a non-empty directory so the rename into place fails.
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("keep"), "").unwrap();

    assert!(library.remove("dune").is_err());
    assert_eq!(library.len(), 1);
    assert_eq!(library.books()[0].title, "Dune");
}
