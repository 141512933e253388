use genproto::api::Pagination as ProtoPagination;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct Pagination {
    pub current_page: i32,
    pub page_size: i32,
    pub total_items: i32,
    pub total_pages: i32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl Pagination {
    pub fn new(current_page: i32, page_size: i32, total_items: i64) -> Self {
        let total_items = total_items as i32;
        let total_pages = if page_size > 0 {
            (total_items + page_size - 1) / page_size
        } else {
            0
        };

        Self {
            current_page,
            page_size,
            total_items,
            total_pages,
            has_next_page: current_page < total_pages,
            has_previous_page: current_page > 1,
        }
    }
}

impl From<ProtoPagination> for Pagination {
    fn from(value: ProtoPagination) -> Self {
        Self {
            current_page: value.current_page,
            page_size: value.page_size,
            total_items: value.total_items,
            total_pages: value.total_pages,
            has_next_page: value.has_next_page,
            has_previous_page: value.has_previous_page,
        }
    }
}

impl From<Pagination> for ProtoPagination {
    fn from(value: Pagination) -> Self {
        Self {
            current_page: value.current_page,
            page_size: value.page_size,
            total_items: value.total_items,
            total_pages: value.total_pages,
            has_next_page: value.has_next_page,
            has_previous_page: value.has_previous_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_flags_middle_page() {
        let p = Pagination::new(2, 10, 35);
        assert_eq!(p.total_pages, 4);
        assert!(p.has_next_page);
        assert!(p.has_previous_page);
    }

    #[test]
    fn pagination_flags_edges() {
        let first = Pagination::new(1, 10, 20);
        assert!(first.has_next_page);
        assert!(!first.has_previous_page);

        let last = Pagination::new(2, 10, 20);
        assert!(!last.has_next_page);
        assert!(last.has_previous_page);

        let empty = Pagination::new(1, 10, 0);
        assert_eq!(empty.total_pages, 0);
        assert!(!empty.has_next_page);
    }
}
