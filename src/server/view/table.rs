use dioxus::prelude::*;

use crate::model::book::BookDto;

#[component]
pub fn BookTable(books: Vec<BookDto>) -> Element {
    rsx! {
        if books.is_empty() {
            p { class: "empty", "No books stored yet" }
        } else {
            table {
                class: "table",
                thead {
                    tr {
                        th { "ID" }
                        th { "Title" }
                        th { "Author" }
                        th { "Pages" }
                        th { "Edition" }
                        th { "Year" }
                    }
                }
                tbody {
                    for book in books {
                        tr {
                            td { "{book.id}" }
                            td { "{book.title}" }
                            td { "{book.author}" }
                            td { {book.pages.as_deref().unwrap_or_default()} }
                            td { {book.edition.as_deref().unwrap_or_default()} }
                            td { {book.year.as_deref().unwrap_or_default()} }
                        }
                    }
                }
            }
        }
    }
}

/// Single-column table used for the author and year listings.
#[component]
pub fn ValueTable(heading: &'static str, values: Vec<String>) -> Element {
    rsx! {
        table {
            class: "table",
            thead {
                tr {
                    th { {heading} }
                }
            }
            tbody {
                for value in values {
                    tr {
                        td { "{value}" }
                    }
                }
            }
        }
    }
}
