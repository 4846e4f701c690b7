//! Statistics Strip Component
//!
//! Headcount and payroll summary above the collaborators table.

use leptos::prelude::*;

use crate::components::format_salary;
use crate::models::{DepartmentCount, EmployeeStats};
use crate::query::QueryState;

/// `IT: 4 · Sales: 2`, used as both text and tooltip
fn department_breakdown(counts: &[DepartmentCount]) -> String {
    counts
        .iter()
        .map(|d| format!("{}: {}", d.department, d.count))
        .collect::<Vec<_>>()
        .join(" · ")
}

#[component]
pub fn StatsBar(stats: QueryState<EmployeeStats>) -> impl IntoView {
    view! {
        <div class="stats-bar">
            {move || {
                stats
                    .data
                    .get()
                    .map(|s| {
                        let by_department = department_breakdown(&s.by_department);
                        let by_department_title = by_department.clone();
                        view! {
                            <div class="stat">
                                <span class="stat-label">"Total"</span>
                                <span class="stat-value">{s.total_employees}</span>
                            </div>
                            <div class="stat">
                                <span class="stat-label">"Active"</span>
                                <span class="stat-value">{s.active_employees}</span>
                            </div>
                            <div class="stat">
                                <span class="stat-label">"Inactive"</span>
                                <span class="stat-value">{s.inactive_employees}</span>
                            </div>
                            <div class="stat">
                                <span class="stat-label">"Average salary"</span>
                                <span class="stat-value">{format_salary(s.average_salary)}</span>
                            </div>
                            <div class="stat">
                                <span class="stat-label">"Payroll"</span>
                                <span class="stat-value">{format_salary(s.total_payroll)}</span>
                            </div>
                            <div class="stat">
                                <span class="stat-label">"Recent hires"</span>
                                <span class="stat-value">{s.recent_hires}</span>
                            </div>
                            <div class="stat stat-wide" title=by_department_title>
                                <span class="stat-label">"By department"</span>
                                <span class="stat-value small">{by_department}</span>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_breakdown() {
        let counts = vec![
            DepartmentCount {
                department: "IT".to_string(),
                count: 4,
            },
            DepartmentCount {
                department: "Ventas".to_string(),
                count: 2,
            },
        ];
        assert_eq!(department_breakdown(&counts), "IT: 4 · Ventas: 2");
        assert_eq!(department_breakdown(&[]), "");
    }
}
