//! HATEOAS link construction.
//!
//! # Design
//! Every function here is a pure function of resource state, base URL and
//! pagination context. The base URL is used verbatim as the prefix of every
//! `href`; nothing is derived from the incoming request.
//!
//! A link is present exactly when its action is currently valid, so the
//! builders decide presence and the serializer drops whatever is `None`.

use crate::http::HttpMethod;
use crate::pagination::PageRequest;
use crate::types::{CollectionLinks, Link, RootLinks, Todo, TodoId, TodoLinks};

pub fn collection_url(base_url: &str) -> String {
    format!("{base_url}/todos")
}

pub fn todo_url(base_url: &str, id: TodoId) -> String {
    format!("{base_url}/todos/{id}")
}

fn page_url(base_url: &str, page: usize, per_page: usize) -> String {
    format!("{base_url}/todos?page={page}&per_page={per_page}")
}

/// Links for one todo. `complete` is only offered while the todo is open.
pub fn todo_links(todo: &Todo, base_url: &str) -> TodoLinks {
    let href = todo_url(base_url, todo.id);
    let complete = (!todo.completed).then(|| {
        Link::with_method(format!("{href}/complete"), HttpMethod::Patch)
    });

    TodoLinks {
        self_link: Some(Link::with_method(href.clone(), HttpMethod::Get)),
        update: Some(Link::with_method(href.clone(), HttpMethod::Put)),
        delete: Some(Link::with_method(href, HttpMethod::Delete)),
        complete,
        todos: Some(Link::with_method(collection_url(base_url), HttpMethod::Get)),
    }
}

/// Links for a page of the collection holding `total` records.
pub fn collection_links(base_url: &str, request: &PageRequest, total: usize) -> CollectionLinks {
    let page = request.page();
    let per_page = request.per_page();
    let total_pages = request.total_pages(total);

    CollectionLinks {
        self_link: Some(Link::new(page_url(base_url, page, per_page))),
        first: Some(Link::new(page_url(base_url, 1, per_page))),
        last: (total_pages > 1).then(|| Link::new(page_url(base_url, total_pages, per_page))),
        next: (page < total_pages).then(|| Link::new(page_url(base_url, page + 1, per_page))),
        prev: (page > 1).then(|| Link::new(page_url(base_url, page - 1, per_page))),
        create: Some(Link::with_method(collection_url(base_url), HttpMethod::Post)),
    }
}

/// Error responses only point back to the collection.
pub fn error_links(base_url: &str) -> TodoLinks {
    TodoLinks {
        todos: Some(Link::with_method(collection_url(base_url), HttpMethod::Get)),
        ..TodoLinks::default()
    }
}

pub fn root_links(base_url: &str) -> RootLinks {
    RootLinks {
        self_link: Link::new(base_url),
        todos: Link::with_method(collection_url(base_url), HttpMethod::Get),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    const BASE: &str = "http://localhost:8000";

    fn todo(id: TodoId, completed: bool) -> Todo {
        Todo {
            id,
            title: "Test".to_string(),
            description: String::new(),
            completed,
            created_at: Utc::now(),
        }
    }

    fn href(link: &Option<Link>) -> &str {
        link.as_ref().map(|l| l.href.as_str()).unwrap_or("")
    }

    #[test]
    fn open_todo_offers_complete() {
        let links = todo_links(&todo(5, false), BASE);
        assert_eq!(href(&links.self_link), "http://localhost:8000/todos/5");
        assert_eq!(links.self_link.as_ref().unwrap().method, Some(HttpMethod::Get));
        assert_eq!(links.update.as_ref().unwrap().method, Some(HttpMethod::Put));
        assert_eq!(links.delete.as_ref().unwrap().method, Some(HttpMethod::Delete));
        assert_eq!(href(&links.todos), "http://localhost:8000/todos");

        let complete = links.complete.unwrap();
        assert_eq!(complete.href, "http://localhost:8000/todos/5/complete");
        assert_eq!(complete.method, Some(HttpMethod::Patch));
    }

    #[test]
    fn completed_todo_has_no_complete_link() {
        let links = todo_links(&todo(5, true), BASE);
        assert!(links.complete.is_none());
        assert!(links.self_link.is_some());
        assert!(links.update.is_some());
        assert!(links.delete.is_some());
        assert!(links.todos.is_some());
    }

    #[test]
    fn middle_page_has_every_link() {
        let links = collection_links(BASE, &PageRequest::new(2, 10), 35);
        assert_eq!(href(&links.self_link), "http://localhost:8000/todos?page=2&per_page=10");
        assert_eq!(href(&links.first), "http://localhost:8000/todos?page=1&per_page=10");
        assert_eq!(href(&links.last), "http://localhost:8000/todos?page=4&per_page=10");
        assert_eq!(href(&links.next), "http://localhost:8000/todos?page=3&per_page=10");
        assert_eq!(href(&links.prev), "http://localhost:8000/todos?page=1&per_page=10");
        assert_eq!(links.create.unwrap().method, Some(HttpMethod::Post));
        assert_eq!(links.first.unwrap().method, None);
    }

    #[test]
    fn first_page_has_no_prev() {
        let links = collection_links(BASE, &PageRequest::new(1, 10), 35);
        assert!(links.prev.is_none());
        assert!(links.next.is_some());
        assert!(links.last.is_some());
    }

    #[test]
    fn last_page_has_no_next() {
        let links = collection_links(BASE, &PageRequest::new(4, 10), 35);
        assert!(links.next.is_none());
        assert!(links.prev.is_some());
        assert_eq!(href(&links.last), "http://localhost:8000/todos?page=4&per_page=10");
    }

    #[test]
    fn single_page_has_no_last() {
        let links = collection_links(BASE, &PageRequest::default(), 0);
        assert!(links.last.is_none());
        assert!(links.next.is_none());
        assert!(links.prev.is_none());
        assert!(links.self_link.is_some());
        assert!(links.first.is_some());
        assert!(links.create.is_some());
    }

    #[test]
    fn page_past_the_end_links_back() {
        let links = collection_links(BASE, &PageRequest::new(9, 10), 35);
        assert!(links.next.is_none());
        assert_eq!(href(&links.prev), "http://localhost:8000/todos?page=8&per_page=10");
    }

    #[test]
    fn error_links_only_point_to_collection() {
        let links = error_links(BASE);
        assert_eq!(
            links,
            TodoLinks {
                todos: Some(Link::with_method("http://localhost:8000/todos", HttpMethod::Get)),
                ..TodoLinks::default()
            }
        );
    }

    #[test]
    fn root_self_link_is_base_url() {
        let links = root_links(BASE);
        assert_eq!(links.self_link, Link::new(BASE));
        assert_eq!(links.todos.href, "http://localhost:8000/todos");
    }
}
