//! # Filtering and pagination of the record list
//!
//! The table view never shows the canonical list directly: it applies one
//! [`FilterSpec`] and then takes one page of the result. Both steps borrow the
//! list and preserve insertion order.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`FilterField`] | The single column a filter matches against. Parsed from the selector value; unknown names are rejected with [`QueryError::UnknownField`]. |
//! | [`filter`] | Substring match on one field. Case-insensitive for name and address, exact case for phone, decimal string form for id. An empty value keeps every record. |
//! | [`PageSize`] | The two offered page sizes, 5 and 10. |
//! | [`paginate`] | `list[page * size .. page * size + size]`, clamped to the list; an out-of-range page is an empty slice. |
//! | [`Pager`] | Current page + page size, with the rule that changing the size goes back to page 0. |

use std::fmt;
use std::str::FromStr;

use crate::error::QueryError;
use crate::models::UserRecord;

/// Column a filter is applied to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FilterField {
    Id,
    #[default]
    FullName,
    Address,
    PhoneNumber,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::Id,
        FilterField::FullName,
        FilterField::Address,
        FilterField::PhoneNumber,
    ];

    /// Selector value, as accepted by `from_str`.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Id => "id",
            FilterField::FullName => "fullName",
            FilterField::Address => "address",
            FilterField::PhoneNumber => "phoneNumber",
        }
    }

    /// Human label for the field selector.
    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Id => "ID",
            FilterField::FullName => "Full Name",
            FilterField::Address => "Address",
            FilterField::PhoneNumber => "Phone Number",
        }
    }

    fn matches(&self, record: &UserRecord, value: &str) -> bool {
        match self {
            FilterField::Id => record.id.to_string().contains(value),
            FilterField::FullName => contains_ignore_case(&record.full_name, value),
            FilterField::Address => contains_ignore_case(&record.address, value),
            FilterField::PhoneNumber => record.phone_number.contains(value),
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(FilterField::Id),
            "fullName" | "name" => Ok(FilterField::FullName),
            "address" => Ok(FilterField::Address),
            "phoneNumber" | "phone" => Ok(FilterField::PhoneNumber),
            other => Err(QueryError::UnknownField {
                field: other.to_string(),
            }),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// A single-field substring filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub field: FilterField,
    pub value: String,
}

impl FilterSpec {
    pub fn new(field: FilterField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.value.is_empty()
    }

    pub fn matches(&self, record: &UserRecord) -> bool {
        self.is_identity() || self.field.matches(record, &self.value)
    }
}

/// Records matching `spec`, in insertion order.
pub fn filter(records: &[UserRecord], spec: &FilterSpec) -> Vec<UserRecord> {
    records
        .iter()
        .filter(|r| spec.matches(r))
        .cloned()
        .collect()
}

/// Rows per page offered by the pager.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageSize {
    #[default]
    Five,
    Ten,
}

impl PageSize {
    pub const ALL: [PageSize; 2] = [PageSize::Five, PageSize::Ten];

    pub fn get(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = QueryError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        match size {
            5 => Ok(PageSize::Five),
            10 => Ok(PageSize::Ten),
            size => Err(QueryError::InvalidPageSize { size }),
        }
    }
}

impl FromStr for PageSize {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let size = s
            .trim()
            .parse::<usize>()
            .map_err(|_| QueryError::UnparsablePageSize {
                input: s.to_string(),
            })?;
        PageSize::try_from(size)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// One page of `list`. Pages past the end are empty.
pub fn paginate<T>(list: &[T], page: usize, page_size: PageSize) -> &[T] {
    let size = page_size.get();
    let start = page.saturating_mul(size).min(list.len());
    let end = start.saturating_add(size).min(list.len());
    &list[start..end]
}

/// Current position in a paginated list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: PageSize,
}

impl Pager {
    pub fn new(page_size: PageSize) -> Self {
        Self { page: 0, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Change the page size. Always returns to the first page.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 0;
    }

    /// Number of pages needed for `total` rows; at least 1.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.get()).max(1)
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page + 1 < self.page_count(total)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn next(&mut self, total: usize) {
        if self.has_next(total) {
            self.page += 1;
        }
    }

    pub fn previous(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Pull the page back to the last one that exists for `total` rows.
    pub fn clamp(&mut self, total: usize) {
        self.page = self.page.min(self.page_count(total) - 1);
    }

    pub fn slice<'a, T>(&self, list: &'a [T]) -> &'a [T] {
        paginate(list, self.page, self.page_size)
    }

    /// "1–5 of 12" style label for the pager footer.
    pub fn range_label(&self, total: usize) -> String {
        if total == 0 {
            return "0–0 of 0".to_string();
        }
        let size = self.page_size.get();
        let from = (self.page * size + 1).min(total);
        let to = ((self.page + 1) * size).min(total);
        format!("{from}–{to} of {total}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordDraft;

    fn records(names: &[&str]) -> Vec<UserRecord> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                RecordDraft::new(*name, format!("{} Main St", i + 1), format!("555-01{i:02}"))
                    .into_record(i as u64 + 1)
            })
            .collect()
    }

    fn numbered(n: usize) -> Vec<UserRecord> {
        (1..=n)
            .map(|i| RecordDraft::new(format!("user{i}"), "", "").into_record(i as u64))
            .collect()
    }

    #[test]
    fn test_name_filter_is_case_insensitive_substring() {
        let list = records(&["Anna", "Susanna", "ANN", "Bob"]);
        let matched = filter(&list, &FilterSpec::new(FilterField::FullName, "ann"));
        let names: Vec<&str> = matched.iter().map(|r| r.full_name.as_str()).collect();
        assert_eq!(names, vec!["Anna", "Susanna", "ANN"]);
    }

    #[test]
    fn test_empty_value_is_identity() {
        let list = records(&["Anna", "Bob"]);
        for field in FilterField::ALL {
            assert_eq!(filter(&list, &FilterSpec::new(field, "")), list);
        }
    }

    #[test]
    fn test_address_filter_is_case_insensitive() {
        let list = records(&["Anna", "Bob"]);
        let matched = filter(&list, &FilterSpec::new(FilterField::Address, "2 MAIN"));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].full_name, "Bob");
    }

    #[test]
    fn test_phone_filter_is_substring() {
        let mut list = records(&["Anna", "Bob"]);
        list[1].phone_number = "+1 (555) ABC".to_string();
        assert_eq!(
            filter(&list, &FilterSpec::new(FilterField::PhoneNumber, "ABC")).len(),
            1
        );
        assert!(filter(&list, &FilterSpec::new(FilterField::PhoneNumber, "abc")).is_empty());
    }

    #[test]
    fn test_id_filter_matches_string_form() {
        let list = numbered(12);
        let ids: Vec<u64> = filter(&list, &FilterSpec::new(FilterField::Id, "1"))
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 10, 11, 12]);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert_eq!(
            "email".parse::<FilterField>(),
            Err(QueryError::UnknownField {
                field: "email".to_string()
            })
        );
        assert_eq!("name".parse::<FilterField>(), Ok(FilterField::FullName));
        assert_eq!("phone".parse::<FilterField>(), Ok(FilterField::PhoneNumber));
        for field in FilterField::ALL {
            assert_eq!(field.as_str().parse::<FilterField>(), Ok(field));
        }
    }

    #[test]
    fn test_paginate_second_page() {
        let list = numbered(12);
        let ids: Vec<u64> = paginate(&list, 1, PageSize::Five).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let list = numbered(12);
        assert!(paginate(&list, 3, PageSize::Five).is_empty());
        assert!(paginate(&list, usize::MAX, PageSize::Ten).is_empty());
    }

    #[test]
    fn test_paginate_partial_last_page() {
        let list = numbered(12);
        assert_eq!(paginate(&list, 2, PageSize::Five).len(), 2);
        assert_eq!(paginate(&list, 1, PageSize::Ten).len(), 2);
    }

    #[test]
    fn test_page_size_parsing() {
        assert_eq!(PageSize::try_from(10), Ok(PageSize::Ten));
        assert_eq!("5".parse::<PageSize>(), Ok(PageSize::Five));
        assert_eq!(
            PageSize::try_from(25),
            Err(QueryError::InvalidPageSize { size: 25 })
        );
        assert_eq!(
            "25".parse::<PageSize>(),
            Err(QueryError::InvalidPageSize { size: 25 })
        );
    }

    #[test]
    fn test_non_numeric_page_size_keeps_input() {
        let err = "abc".parse::<PageSize>().unwrap_err();
        assert_eq!(
            err,
            QueryError::UnparsablePageSize {
                input: "abc".to_string()
            }
        );
        assert_eq!(err.to_string(), "'abc' is not a page size");
    }

    #[test]
    fn test_changing_page_size_resets_page() {
        let mut pager = Pager::default();
        pager.set_page(2);
        pager.set_page_size(PageSize::Ten);
        assert_eq!(pager.page(), 0);
        assert_eq!(pager.page_size(), PageSize::Ten);
    }

    #[test]
    fn test_pager_navigation() {
        let mut pager = Pager::new(PageSize::Five);
        assert_eq!(pager.page_count(12), 3);
        assert_eq!(pager.page_count(0), 1);

        pager.next(12);
        pager.next(12);
        pager.next(12);
        assert_eq!(pager.page(), 2);
        assert!(!pager.has_next(12));

        pager.previous();
        assert_eq!(pager.page(), 1);
        assert!(pager.has_previous());
    }

    #[test]
    fn test_pager_clamp_after_shrink() {
        let mut pager = Pager::new(PageSize::Five);
        pager.set_page(2);
        pager.clamp(7);
        assert_eq!(pager.page(), 1);
        pager.clamp(0);
        assert_eq!(pager.page(), 0);
    }

    #[test]
    fn test_range_label() {
        let mut pager = Pager::new(PageSize::Five);
        assert_eq!(pager.range_label(0), "0–0 of 0");
        assert_eq!(pager.range_label(12), "1–5 of 12");
        pager.set_page(2);
        assert_eq!(pager.range_label(12), "11–12 of 12");
    }

    #[test]
    fn test_filter_then_paginate() {
        let list = numbered(30);
        let matched = filter(&list, &FilterSpec::new(FilterField::Id, "2"));
        // 2, 12, 20..=29
        assert_eq!(matched.len(), 12);
        let pager = Pager::new(PageSize::Ten);
        let page: Vec<u64> = pager.slice(&matched).iter().map(|r| r.id).collect();
        assert_eq!(page, vec![2, 12, 20, 21, 22, 23, 24, 25, 26, 27]);
    }
}
