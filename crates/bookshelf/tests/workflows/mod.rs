use super::*;

#[traced_test]
#[tokio::test]
async fn test_collections_survive_restart() -> TestResult<()> {
  let (path, _dir) = create_test_db();

  {
    let mut shelf = open_shelf(&path);
    assert_eq!(shelf.stats(), Stats::default());

    shelf.search("dune", "all", SortOrder::Relevance).await?;
    shelf.select_for_detail("abc123");
    let _ = shelf.save_selected(SaveTarget::Reading, 0)?;
    shelf.select_for_detail("def456");
    let _ = shelf.save_selected(SaveTarget::Wishlist, 0)?;

    shelf.search("foundation", "all", SortOrder::Newest).await?;
    shelf.select_for_detail("fnd1");
    let _ = shelf.save_selected(SaveTarget::Completed, 0)?;
    let _ = shelf.set_progress("abc123", 42)?;
  }

  let shelf = open_shelf(&path);
  assert_eq!(shelf.stats(), Stats { total_library: 2, currently_reading: 1, wishlist_count: 1 });
  assert!(shelf.search_view().is_empty());
  assert!(shelf.detail_view().is_none());

  let library = shelf.library_view(LibraryFilter::All);
  assert_eq!(library.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), vec!["abc123", "fnd1"]);
  assert_eq!(library[0].progress, Some(42));
  assert_eq!(library[0].authors, "Frank Herbert");
  assert_eq!(shelf.wishlist_view()[0].title, "Dune Messiah");
  Ok(())
}

#[tokio::test]
async fn test_remove_persists() -> TestResult<()> {
  let (path, _dir) = create_test_db();

  {
    let mut shelf = open_shelf(&path);
    shelf.search("dune", "all", SortOrder::Relevance).await?;
    shelf.select_for_detail("abc123");
    let _ = shelf.save_selected(SaveTarget::Reading, 0)?;
    let _ = shelf.save_selected(SaveTarget::Wishlist, 0)?;

    let mutation = shelf.remove_item("abc123", Collection::Library);
    assert!(mutation.applied);
    assert!(mutation.warning.is_none());
  }

  let mut shelf = open_shelf(&path);
  assert_eq!(shelf.stats(), Stats { total_library: 0, currently_reading: 0, wishlist_count: 1 });

  // Wishlist entries remain selectable after a restart
  assert!(shelf.select_for_detail("abc123"));
  let detail = shelf.detail_view().unwrap();
  assert_eq!(detail.title, "Dune");
  assert_eq!(detail.pages, "412 pages");
  Ok(())
}

#[tokio::test]
async fn test_category_filter_reaches_provider() -> TestResult<()> {
  let (path, _dir) = create_test_db();
  let mut shelf = open_shelf(&path);

  shelf.search("dune", "fiction", SortOrder::Relevance).await?;
  assert_eq!(shelf.search_view().len(), 1);

  shelf.search("dune", "all", SortOrder::Relevance).await?;
  assert_eq!(shelf.search_view().len(), 2);
  Ok(())
}

#[tokio::test]
async fn test_status_change_moves_between_filters() -> TestResult<()> {
  let (path, _dir) = create_test_db();
  let mut shelf = open_shelf(&path);

  shelf.search("dune", "all", SortOrder::Relevance).await?;
  shelf.select_for_detail("abc123");
  let _ = shelf.save_selected(SaveTarget::Reading, 60)?;
  assert_eq!(shelf.library_view(LibraryFilter::Reading).len(), 1);

  let _ = shelf.set_status("abc123", ReadingStatus::Completed)?;
  assert!(shelf.library_view(LibraryFilter::Reading).is_empty());
  assert_eq!(shelf.library_view(LibraryFilter::Completed).len(), 1);

  let shelf = open_shelf(&path);
  assert_eq!(shelf.state().library()[0].status, ReadingStatus::Completed);
  assert_eq!(shelf.state().library()[0].progress, 60);
  Ok(())
}
