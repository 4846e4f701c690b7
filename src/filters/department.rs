//! Division listing filters

use serde::{Deserialize, Serialize};

use super::{
    ensure_known_columns, insert_selection, selected, ColumnSelections, FilterError, FilterState, Sort, SortOrder,
    DEFAULT_PAGE_SIZE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentSortField {
    Name,
    Level,
    EmployeeCount,
    #[default]
    CreatedAt,
}

impl DepartmentSortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DepartmentSortField::Name => "name",
            DepartmentSortField::Level => "level",
            DepartmentSortField::EmployeeCount => "employee_count",
            DepartmentSortField::CreatedAt => "created_at",
        }
    }
}

/// Field the search box applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchColumn {
    #[default]
    Name,
    AmbassadorName,
}

impl SearchColumn {
    pub const ALL: [SearchColumn; 2] = [SearchColumn::Name, SearchColumn::AmbassadorName];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchColumn::Name => "name",
            SearchColumn::AmbassadorName => "ambassador_name",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchColumn::Name => "Division",
            SearchColumn::AmbassadorName => "Ambassador",
        }
    }
}

/// Column keys of the divisions table that carry checkbox filters
pub const LEVEL_COLUMN: &str = "level";
pub const NAME_COLUMN: &str = "name";
pub const PARENT_COLUMN: &str = "parent";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DepartmentColumns {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentFilters {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub search_column: SearchColumn,
    #[serde(flatten)]
    pub columns: DepartmentColumns,
    pub sort_by: DepartmentSortField,
    pub sort_order: SortOrder,
}

impl Default for DepartmentFilters {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
            search: None,
            search_column: SearchColumn::Name,
            columns: DepartmentColumns::default(),
            sort_by: DepartmentSortField::CreatedAt,
            sort_order: SortOrder::Desc,
        }
    }
}

impl DepartmentFilters {
    /// Query string pairs for `GET /departments`; lists use `key[]=value`
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("per_page".to_string(), self.per_page.to_string()),
            ("search_column".to_string(), self.search_column.as_str().to_string()),
            ("sort_by".to_string(), self.sort_by.as_str().to_string()),
            ("sort_order".to_string(), self.sort_order.as_str().to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        for level in self.columns.level.iter().flatten() {
            pairs.push(("level[]".to_string(), level.to_string()));
        }
        for name in self.columns.name.iter().flatten() {
            pairs.push(("name[]".to_string(), name.clone()));
        }
        for parent in self.columns.parent_name.iter().flatten() {
            pairs.push(("parent_name[]".to_string(), parent.clone()));
        }
        pairs
    }
}

/// Switch the searched field; the page is left alone
pub fn set_search_column(prev: &DepartmentFilters, column: SearchColumn) -> DepartmentFilters {
    DepartmentFilters {
        search_column: column,
        ..prev.clone()
    }
}

impl FilterState for DepartmentFilters {
    type SortField = DepartmentSortField;
    type Columns = DepartmentColumns;

    fn parse_sort_field(field: &str) -> Result<DepartmentSortField, FilterError> {
        match field {
            "name" => Ok(DepartmentSortField::Name),
            "level" => Ok(DepartmentSortField::Level),
            "employee_count" => Ok(DepartmentSortField::EmployeeCount),
            "created_at" => Ok(DepartmentSortField::CreatedAt),
            other => Err(FilterError::UnknownSortField(other.to_string())),
        }
    }

    fn parse_columns(selections: &ColumnSelections) -> Result<DepartmentColumns, FilterError> {
        ensure_known_columns(selections, &[LEVEL_COLUMN, NAME_COLUMN, PARENT_COLUMN])?;
        Ok(DepartmentColumns {
            level: selected(selections, LEVEL_COLUMN, |v| v.parse().ok())?,
            name: selected(selections, NAME_COLUMN, |v| Some(v.to_string()))?,
            parent_name: selected(selections, PARENT_COLUMN, |v| Some(v.to_string()))?,
        })
    }

    fn selections(&self) -> ColumnSelections {
        let mut selections = ColumnSelections::new();
        insert_selection(&mut selections, LEVEL_COLUMN, &self.columns.level);
        insert_selection(&mut selections, NAME_COLUMN, &self.columns.name);
        insert_selection(&mut selections, PARENT_COLUMN, &self.columns.parent_name);
        selections
    }

    fn sort_key(&self) -> (&'static str, SortOrder) {
        (self.sort_by.as_str(), self.sort_order)
    }

    fn page(&self) -> u32 {
        self.page
    }

    fn per_page(&self) -> u32 {
        self.per_page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn set_per_page(&mut self, per_page: u32) {
        self.per_page = per_page;
    }

    fn set_search(&mut self, search: Option<String>) {
        self.search = search;
    }

    fn set_columns(&mut self, columns: DepartmentColumns) {
        self.columns = columns;
    }

    fn set_sort(&mut self, sort: Sort<DepartmentSortField>) {
        self.sort_by = sort.field;
        self.sort_order = sort.order;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{apply_table_change, translate, RawSorter, RawTableChange, TablePagination, TableSortOrder};

    fn selections(pairs: &[(&str, &[&str])]) -> ColumnSelections {
        pairs
            .iter()
            .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
            .collect()
    }

    fn event(filters: ColumnSelections, sorter: RawSorter) -> RawTableChange {
        RawTableChange {
            pagination: TablePagination {
                current: Some(1),
                page_size: Some(10),
            },
            filters,
            sorter,
        }
    }

    #[test]
    fn test_defaults() {
        let filters = DepartmentFilters::default();
        assert_eq!(filters.page, 1);
        assert_eq!(filters.per_page, 10);
        assert_eq!(filters.sort_by, DepartmentSortField::CreatedAt);
        assert_eq!(filters.sort_order, SortOrder::Desc);
        assert_eq!(filters.search_column, SearchColumn::Name);
    }

    #[test]
    fn test_cleared_level_filter_is_none() {
        let first = translate::<DepartmentFilters>(&event(selections(&[("level", &["1", "2"])]), RawSorter::default())).unwrap();
        let state = apply_table_change(&DepartmentFilters::default(), first);
        assert_eq!(state.columns.level, Some(vec![1, 2]));

        let second = translate::<DepartmentFilters>(&event(selections(&[("level", &[])]), RawSorter::default())).unwrap();
        let state = apply_table_change(&state, second);
        assert_eq!(state.columns.level, None);
    }

    #[test]
    fn test_parent_column_maps_to_parent_name() {
        let parsed = translate::<DepartmentFilters>(&event(selections(&[("parent", &["Dirección"])]), RawSorter::default())).unwrap();
        assert_eq!(parsed.columns.parent_name, Some(vec!["Dirección".to_string()]));
        assert_eq!(parsed.columns.name, None);
    }

    #[test]
    fn test_unknown_column_rejected() {
        let err = translate::<DepartmentFilters>(&event(selections(&[("salary", &["1"])]), RawSorter::default())).unwrap_err();
        assert_eq!(err, FilterError::UnknownColumn("salary".to_string()));
    }

    #[test]
    fn test_bad_level_value_rejected() {
        let err = translate::<DepartmentFilters>(&event(selections(&[("level", &["two"])]), RawSorter::default())).unwrap_err();
        assert!(matches!(err, FilterError::InvalidValue { ref column, .. } if column == "level"));
    }

    #[test]
    fn test_unknown_sort_field_rejected() {
        let sorter = RawSorter {
            field: Some("ambassador_name".to_string()),
            order: Some(TableSortOrder::Ascend),
        };
        let err = translate::<DepartmentFilters>(&event(ColumnSelections::new(), sorter)).unwrap_err();
        assert_eq!(err, FilterError::UnknownSortField("ambassador_name".to_string()));
    }

    #[test]
    fn test_sort_by_employee_count_descending() {
        let prev = DepartmentFilters::default();
        let sorter = RawSorter {
            field: Some("employee_count".to_string()),
            order: Some(TableSortOrder::Descend),
        };
        let parsed = translate::<DepartmentFilters>(&event(ColumnSelections::new(), sorter)).unwrap();
        let next = apply_table_change(&prev, parsed);

        assert_eq!(next.page, 1);
        assert_eq!(next.sort_by, DepartmentSortField::EmployeeCount);
        assert_eq!(next.sort_order, SortOrder::Desc);

        let pairs = next.query_pairs();
        assert!(pairs.contains(&("sort_by".to_string(), "employee_count".to_string())));
        assert!(pairs.contains(&("sort_order".to_string(), "desc".to_string())));
        assert!(pairs.contains(&("page".to_string(), "1".to_string())));
    }

    #[test]
    fn test_query_pairs_lists_and_search() {
        let filters = DepartmentFilters {
            search: Some("ana".to_string()),
            search_column: SearchColumn::AmbassadorName,
            columns: DepartmentColumns {
                level: Some(vec![1, 3]),
                name: None,
                parent_name: Some(vec!["IT".to_string()]),
            },
            ..Default::default()
        };
        let pairs = filters.query_pairs();
        let levels: Vec<_> = pairs.iter().filter(|(k, _)| k == "level[]").map(|(_, v)| v.as_str()).collect();
        assert_eq!(levels, vec!["1", "3"]);
        assert!(pairs.contains(&("parent_name[]".to_string(), "IT".to_string())));
        assert!(pairs.contains(&("search".to_string(), "ana".to_string())));
        assert!(pairs.contains(&("search_column".to_string(), "ambassador_name".to_string())));
        assert!(!pairs.iter().any(|(k, _)| k == "name[]"));
    }

    #[test]
    fn test_search_column_keeps_page() {
        let prev = DepartmentFilters {
            page: 4,
            ..Default::default()
        };
        let next = set_search_column(&prev, SearchColumn::AmbassadorName);
        assert_eq!(next.page, 4);
        assert_eq!(next.search_column, SearchColumn::AmbassadorName);
    }
}
