//! Verify the link builders against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs and the exact links expected for them.
//! Comparing parsed JSON (not raw strings) avoids false negatives from
//! field-ordering differences.

use serde_json::Value;
use todo_core::links::{collection_links, todo_links};
use todo_core::{PageRequest, Todo};

/// `null` in a vector means the link must be absent.
fn expected_href(base_url: &str, value: &Value) -> Option<String> {
    value.as_str().map(|path| format!("{base_url}{path}"))
}

// ---------------------------------------------------------------------------
// Collection links
// ---------------------------------------------------------------------------

#[test]
fn collection_link_vectors() {
    let raw = include_str!("../../test-vectors/collection_links.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let base_url = vectors["base_url"].as_str().unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let total = case["total"].as_u64().unwrap() as usize;
        let request = PageRequest::from_query(
            case["query"]["page"].as_str(),
            case["query"]["per_page"].as_str(),
        );

        let meta = &case["expected_meta"];
        assert_eq!(request.page() as u64, meta["page"].as_u64().unwrap(), "{name}: page");
        assert_eq!(request.per_page() as u64, meta["per_page"].as_u64().unwrap(), "{name}: per_page");
        assert_eq!(
            request.total_pages(total) as u64,
            meta["total_pages"].as_u64().unwrap(),
            "{name}: total_pages"
        );

        let links = collection_links(base_url, &request, total);
        let expected = &case["expected_links"];
        let actual = [
            ("self", links.self_link),
            ("first", links.first),
            ("last", links.last),
            ("next", links.next),
            ("prev", links.prev),
        ];
        for (rel, link) in actual {
            assert_eq!(
                link.map(|l| l.href),
                expected_href(base_url, &expected[rel]),
                "{name}: {rel}"
            );
        }

        let create = links.create.expect("create link is always present");
        assert_eq!(create.href, format!("{base_url}/todos"), "{name}: create");
    }
}

// ---------------------------------------------------------------------------
// Resource links
// ---------------------------------------------------------------------------

#[test]
fn todo_link_vectors() {
    let raw = include_str!("../../test-vectors/todo_links.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let base_url = vectors["base_url"].as_str().unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let todo: Todo = serde_json::from_value(case["todo"].clone()).unwrap();

        let links = serde_json::to_value(todo_links(&todo, base_url)).unwrap();
        assert_eq!(links, case["expected_links"], "{name}: links");
    }
}
