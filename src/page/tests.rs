use super::*;

const SOURCES: [&str; 5] = [
    "/section1/testpage1.md",
    "/section1/testpage2.md",
    "/section2/testpage3.md",
    "/section2/testpage4.md",
    "/section3/testpage5.md",
];

fn make_test_pages() -> Pages {
    SOURCES.iter().map(|src| Page::new(src).unwrap()).collect()
}

/// Compare partitions by page identity rather than by value
fn assert_same_pages(actual: &PagesPartition<'_>, expected: &[&[&Page]]) {
    assert_eq!(actual.len(), expected.len(), "partition count");
    for (partition, want) in actual.iter().zip(expected) {
        assert_eq!(partition.len(), want.len(), "partition {}", partition.index());
        for (got, want) in partition.iter().zip(want.iter()) {
            assert!(std::ptr::eq(got, *want), "{} is not {}", got.path, want.path);
        }
    }
}

#[test]
fn test_partition_with_whole_sequence() {
    let pages = make_test_pages();
    let part = pages.partition_with(5).unwrap();
    assert_same_pages(
        &part,
        &[&[&pages[0], &pages[1], &pages[2], &pages[3], &pages[4]]],
    );
}

#[test]
fn test_partition_with_three() {
    let pages = make_test_pages();
    let part = pages.partition_with(3).unwrap();
    assert_same_pages(
        &part,
        &[&[&pages[0], &pages[1], &pages[2]], &[&pages[3], &pages[4]]],
    );
}

#[test]
fn test_partition_with_two() {
    let pages = make_test_pages();
    let part = pages.partition_with(2).unwrap();
    assert_same_pages(
        &part,
        &[
            &[&pages[0], &pages[1]],
            &[&pages[2], &pages[3]],
            &[&pages[4]],
        ],
    );
}

#[test]
fn test_partition_with_one() {
    let pages = make_test_pages();
    let part = pages.partition_with(1).unwrap();
    assert_same_pages(
        &part,
        &[
            &[&pages[0]],
            &[&pages[1]],
            &[&pages[2]],
            &[&pages[3]],
            &[&pages[4]],
        ],
    );
}

#[test]
fn test_partition_with_large_size() {
    // All items fall within a single partition
    let pages = make_test_pages();
    let part = pages.partition_with(20).unwrap();
    assert_same_pages(
        &part,
        &[&[&pages[0], &pages[1], &pages[2], &pages[3], &pages[4]]],
    );
}

#[test]
fn test_partition_with_zero() {
    let pages = make_test_pages();
    let part = pages.partition_with(0);
    assert!(part.is_err());
}

#[test]
fn test_section_from_path() {
    let pages = make_test_pages();
    let sections: Vec<&str> = pages.iter().map(|p| p.section.as_str()).collect();
    assert_eq!(
        sections,
        vec!["section1", "section1", "section2", "section2", "section3"]
    );
    assert_eq!(pages.sections(), vec!["section1", "section2", "section3"]);
}

#[test]
fn test_root_page_has_no_section() {
    let page = Page::new("about.md").unwrap();
    assert_eq!(page.path, "/about.md");
    assert_eq!(page.section, "");
    assert_eq!(page.name(), "about");
}

#[test]
fn test_in_section_preserves_order() {
    let pages = make_test_pages();
    let section2 = pages.in_section("section2");
    assert_eq!(section2.len(), 2);
    assert_eq!(section2[0].path, "/section2/testpage3.md");
    assert_eq!(section2[1].path, "/section2/testpage4.md");
    assert!(pages.in_section("missing").is_empty());
}

#[test]
fn test_content_hash() {
    let page = Page::with_content("/posts/hello.md", b"hello").unwrap();
    assert_eq!(
        page.content_hash.as_deref(),
        Some("2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824")
    );
    assert_eq!(Page::new("/posts/hello.md").unwrap().content_hash, None);
}

#[test]
fn test_serialize_pages_partition() {
    let pages: Pages = ["/a/one.md", "/a/two.md", "/b/three.md"]
        .iter()
        .map(|p| Page::new(p).unwrap())
        .collect();
    let part = pages.partition_with(2).unwrap();
    let json = serde_json::to_value(&part).unwrap();
    assert_eq!(json[0][1]["path"], "/a/two.md");
    assert_eq!(json[1][0]["section"], "b");
    assert!(json[0][0].get("content_hash").is_none());
}
