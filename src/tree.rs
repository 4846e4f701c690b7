//! Tree Utilities
//!
//! Builds the division hierarchy from the flat list the API returns: the
//! nested parent selector used by the division form and the indented rows
//! of the tree view.

use crate::models::Department;
use std::collections::HashMap;

pub const NO_PARENT_LABEL: &str = "No parent division";

/// Value of a parent selector node. `NoParent` is the root sentinel and
/// cannot collide with a real department id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParentChoice {
    #[default]
    NoParent,
    Department(u32),
}

impl ParentChoice {
    pub fn from_parent_id(parent_id: Option<u32>) -> Self {
        parent_id.map_or(ParentChoice::NoParent, ParentChoice::Department)
    }

    pub fn parent_id(&self) -> Option<u32> {
        match self {
            ParentChoice::NoParent => None,
            ParentChoice::Department(id) => Some(*id),
        }
    }

    /// Stable `<option value>` representation
    pub fn key(&self) -> String {
        match self {
            ParentChoice::NoParent => "root".to_string(),
            ParentChoice::Department(id) => id.to_string(),
        }
    }

    pub fn from_key(key: &str) -> Self {
        key.parse().map_or(ParentChoice::NoParent, ParentChoice::Department)
    }
}

/// Node of the parent selector
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub value: ParentChoice,
    pub title: String,
    pub disabled: bool,
    pub children: Vec<TreeNode>,
}

/// Parent selector for the division form: a single "no parent" root whose
/// children are the top-level divisions.
///
/// `editing` disables the node of the division being edited. Only that node
/// is disabled; its descendants stay selectable.
pub fn build_parent_selector(departments: &[Department], editing: Option<u32>) -> Vec<TreeNode> {
    vec![TreeNode {
        value: ParentChoice::NoParent,
        title: NO_PARENT_LABEL.to_string(),
        disabled: false,
        children: build_children(departments, None, editing, 0),
    }]
}

fn build_children(
    departments: &[Department],
    parent_id: Option<u32>,
    editing: Option<u32>,
    depth: usize,
) -> Vec<TreeNode> {
    // A well-formed hierarchy is never deeper than the list is long
    if depth > departments.len() {
        return Vec::new();
    }
    departments
        .iter()
        .filter(|d| d.parent_id == parent_id)
        .map(|d| TreeNode {
            value: ParentChoice::Department(d.id),
            title: d.name.clone(),
            disabled: editing == Some(d.id),
            children: build_children(departments, Some(d.id), editing, depth + 1),
        })
        .collect()
}

/// One `<option>` of the flattened selector
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorOption {
    pub value: ParentChoice,
    pub title: String,
    pub depth: usize,
    pub disabled: bool,
}

impl SelectorOption {
    pub fn indented_title(&self) -> String {
        format!("{}{}", "\u{00a0}\u{00a0}".repeat(self.depth), self.title)
    }
}

/// Depth-first flattening of the selector, parents before children
pub fn flatten_selector(nodes: &[TreeNode]) -> Vec<SelectorOption> {
    fn collect(nodes: &[TreeNode], depth: usize, result: &mut Vec<SelectorOption>) {
        for node in nodes {
            result.push(SelectorOption {
                value: node.value,
                title: node.title.clone(),
                depth,
                disabled: node.disabled,
            });
            collect(&node.children, depth + 1, result);
        }
    }

    let mut result = Vec::new();
    collect(nodes, 0, &mut result);
    result
}

/// Divisions in tree-view order paired with their depth. Rows whose parent
/// is not among `departments` are left out.
pub fn flatten_hierarchy(departments: &[Department]) -> Vec<(Department, usize)> {
    let mut children_map: HashMap<Option<u32>, Vec<&Department>> = HashMap::new();
    for department in departments {
        children_map.entry(department.parent_id).or_default().push(department);
    }

    fn collect(
        parent_id: Option<u32>,
        depth: usize,
        limit: usize,
        children_map: &HashMap<Option<u32>, Vec<&Department>>,
        result: &mut Vec<(Department, usize)>,
    ) {
        if depth > limit {
            return;
        }
        if let Some(children) = children_map.get(&parent_id) {
            for department in children {
                result.push(((*department).clone(), depth));
                collect(Some(department.id), depth + 1, limit, children_map, result);
            }
        }
    }

    let mut result = Vec::new();
    collect(None, 0, departments.len(), &children_map, &mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_department(id: u32, name: &str, parent_id: Option<u32>) -> Department {
        Department {
            id,
            name: name.to_string(),
            parent_id,
            parent: None,
            level: 1,
            employee_count: 0,
            ambassador_name: None,
            children_count: 0,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn count_nodes(nodes: &[TreeNode]) -> usize {
        nodes.iter().map(|n| 1 + count_nodes(&n.children)).sum()
    }

    #[test]
    fn test_empty_list_gives_root_only() {
        let tree = build_parent_selector(&[], None);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].value, ParentChoice::NoParent);
        assert_eq!(tree[0].title, NO_PARENT_LABEL);
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn test_nesting_keeps_source_order() {
        let departments = vec![
            make_department(1, "Zeta", None),
            make_department(2, "Alpha", None),
            make_department(3, "Mid", Some(1)),
            make_department(4, "Beta", Some(1)),
            make_department(5, "Leaf", Some(3)),
        ];
        let tree = build_parent_selector(&departments, None);
        let roots = &tree[0].children;

        assert_eq!(roots.iter().map(|n| n.title.as_str()).collect::<Vec<_>>(), vec!["Zeta", "Alpha"]);
        assert_eq!(
            roots[0].children.iter().map(|n| n.title.as_str()).collect::<Vec<_>>(),
            vec!["Mid", "Beta"]
        );
        assert_eq!(roots[0].children[0].children[0].value, ParentChoice::Department(5));
        assert_eq!(count_nodes(&tree), 6);
    }

    #[test]
    fn test_orphans_are_dropped() {
        let departments = vec![
            make_department(1, "Root", None),
            make_department(2, "Orphan", Some(42)),
            make_department(3, "Child of orphan", Some(2)),
        ];
        let tree = build_parent_selector(&departments, None);
        // root sentinel + "Root"
        assert_eq!(count_nodes(&tree), 2);
        assert!(count_nodes(&tree) - 1 <= departments.len());
    }

    #[test]
    fn test_edit_disables_only_edited_node() {
        let departments = vec![
            make_department(1, "Root", None),
            make_department(2, "Child", Some(1)),
            make_department(3, "Grandchild", Some(2)),
        ];
        let tree = build_parent_selector(&departments, Some(2));
        let options = flatten_selector(&tree);

        let disabled: Vec<_> = options.iter().filter(|o| o.disabled).map(|o| o.value).collect();
        assert_eq!(disabled, vec![ParentChoice::Department(2)]);
        // descendants of the edited node remain selectable
        assert!(options.iter().any(|o| o.value == ParentChoice::Department(3) && !o.disabled));
    }

    #[test]
    fn test_cycles_terminate() {
        let departments = vec![
            make_department(1, "A", Some(2)),
            make_department(2, "B", Some(1)),
            make_department(3, "Self", Some(3)),
        ];
        let tree = build_parent_selector(&departments, None);
        assert_eq!(count_nodes(&tree), 1);
        assert!(flatten_hierarchy(&departments).is_empty());
    }

    #[test]
    fn test_duplicate_ids_terminate() {
        let departments = vec![make_department(1, "A", None), make_department(1, "A again", Some(1))];
        let tree = build_parent_selector(&departments, None);
        assert!(count_nodes(&tree) > 1);
        assert!(!flatten_hierarchy(&departments).is_empty());
    }

    #[test]
    fn test_flatten_selector_depths() {
        let departments = vec![make_department(1, "Root", None), make_department(2, "Child", Some(1))];
        let options = flatten_selector(&build_parent_selector(&departments, None));
        let shape: Vec<_> = options.iter().map(|o| (o.value, o.depth)).collect();
        assert_eq!(
            shape,
            vec![
                (ParentChoice::NoParent, 0),
                (ParentChoice::Department(1), 1),
                (ParentChoice::Department(2), 2),
            ]
        );
        assert_eq!(options[2].indented_title(), "\u{00a0}\u{00a0}\u{00a0}\u{00a0}Child");
    }

    #[test]
    fn test_flatten_hierarchy() {
        let departments = vec![
            make_department(10, "Dirección General", None),
            make_department(21, "Tecnología", Some(10)),
            make_department(35, "Soporte", Some(21)),
            make_department(22, "Finanzas", Some(10)),
            make_department(40, "Sin padre visible", Some(99)),
            make_department(11, "Comité", None),
        ];

        let rows = flatten_hierarchy(&departments);
        let shape: Vec<_> = rows.iter().map(|(d, depth)| (d.name.as_str(), *depth)).collect();

        assert_eq!(
            shape,
            vec![
                ("Dirección General", 0),
                ("Tecnología", 1),
                ("Soporte", 2),
                ("Finanzas", 1),
                ("Comité", 0),
            ]
        );
        // a division whose parent is on another page is left out
        assert!(rows.iter().all(|(d, _)| d.id != 40));
    }

    #[test]
    fn test_parent_choice_keys() {
        assert_eq!(ParentChoice::from_key("root"), ParentChoice::NoParent);
        assert_eq!(ParentChoice::from_key("12"), ParentChoice::Department(12));
        assert_eq!(ParentChoice::Department(7).key(), "7");
        assert_eq!(ParentChoice::from_parent_id(None).parent_id(), None);
    }
}
