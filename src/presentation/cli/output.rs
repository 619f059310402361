// src/presentation/cli/output.rs
use serde::Serialize;

use super::error::CliResult;
use crate::application::dto::{CatalogEntityDto, PasswordChangedDto, RecruitmentPostDto, UserDto};
use crate::application::queries::dashboard::DashboardView;
use crate::domain::dashboard::StatFormat;
use crate::domain::user::PasswordStrengthReport;

const MAX_CELL_WIDTH: usize = 40;

/// Plain-text table with left-aligned columns.
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells.into_iter().map(truncate).collect());
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let line = |cells: Vec<&str>| {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| {
                    let pad = width.saturating_sub(cell.chars().count());
                    format!("{cell}{}", " ".repeat(pad))
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut out = vec![line(self.headers.clone())];
        out.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("  "),
        );
        for row in &self.rows {
            out.push(line(row.iter().map(String::as_str).collect()));
        }
        if self.rows.is_empty() {
            out.push("(no records)".to_string());
        }
        out.join("\n")
    }
}

fn truncate(value: String) -> String {
    if value.chars().count() <= MAX_CELL_WIDTH {
        value
    } else {
        let head: String = value.chars().take(MAX_CELL_WIDTH - 3).collect();
        format!("{head}...")
    }
}

fn or_dash(value: Option<impl ToString>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Renders results either as JSON or as a human-readable table.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    fn render<T>(&self, value: &T, text: impl FnOnce() -> String) -> CliResult<String>
    where
        T: Serialize + ?Sized,
    {
        if self.json {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(text())
        }
    }

    pub fn catalog_entities(&self, items: &[CatalogEntityDto]) -> CliResult<String> {
        self.render(items, || {
            let mut table = Table::new(vec!["SLUG", "NAME", "STATUS", "ID"]);
            for item in items {
                table.row(vec![
                    item.slug.clone(),
                    item.name.clone(),
                    item.status.to_string(),
                    item.id.clone(),
                ]);
            }
            table.render()
        })
    }

    pub fn catalog_entity(&self, item: &CatalogEntityDto) -> CliResult<String> {
        self.render(item, || {
            format!(
                "{} '{}' (slug: {}, status: {}, id: {})",
                item.kind.label(),
                item.name,
                item.slug,
                item.status,
                item.id
            )
        })
    }

    pub fn posts(&self, posts: &[RecruitmentPostDto]) -> CliResult<String> {
        self.render(posts, || {
            let mut table = Table::new(vec![
                "SLUG", "TITLE", "STATUS", "LOCATION", "SALARY", "DEADLINE",
            ]);
            for post in posts {
                table.row(vec![
                    post.slug.clone(),
                    post.title.clone(),
                    post.status.to_string(),
                    or_dash(post.location.as_ref()),
                    salary_range(post),
                    or_dash(post.deadline),
                ]);
            }
            table.render()
        })
    }

    pub fn post(&self, post: &RecruitmentPostDto) -> CliResult<String> {
        self.render(post, || {
            let mut lines = vec![
                format!("{} [{}]", post.title, post.status),
                format!("slug:      {}", post.slug),
                format!("location:  {}", or_dash(post.location.as_ref())),
                format!("category:  {}", or_dash(post.job_category.as_ref())),
                format!("type:      {}", or_dash(post.job_type.as_ref())),
                format!("salary:    {}", salary_range(post)),
                format!("deadline:  {}", or_dash(post.deadline)),
                String::new(),
                post.description.clone(),
            ];
            if let Some(introduce) = &post.introduce {
                lines.insert(1, introduce.clone());
            }
            lines.join("\n")
        })
    }

    pub fn users(&self, users: &[UserDto]) -> CliResult<String> {
        self.render(users, || {
            let mut table = Table::new(vec!["EMAIL", "ROLE", "ACTIVE", "CREATED"]);
            for user in users {
                table.row(vec![
                    user.email.clone(),
                    user.role.to_string(),
                    if user.is_active { "yes" } else { "no" }.to_string(),
                    or_dash(user.created_at.map(|at| at.format("%Y-%m-%d"))),
                ]);
            }
            table.render()
        })
    }

    pub fn user(&self, user: &UserDto) -> CliResult<String> {
        self.render(user, || format!("{} ({})", user.email, user.role))
    }

    pub fn password_changed(&self, changed: &PasswordChangedDto) -> CliResult<String> {
        self.render(changed, || {
            format!(
                "password changed for {}\n{}",
                changed.user.email,
                strength_text(&changed.strength)
            )
        })
    }

    pub fn password_strength(&self, report: &PasswordStrengthReport) -> CliResult<String> {
        self.render(report, || strength_text(report))
    }

    pub fn dashboard(&self, view: &DashboardView) -> CliResult<String> {
        self.render(view, || {
            let data = &view.data;
            let mut out = Vec::new();
            if view.is_fallback {
                out.push("(showing fallback data)".to_string());
            }

            let mut stats = Table::new(vec!["METRIC", "VALUE", "CHANGE"]);
            for stat in &data.stats {
                let value = match stat.format {
                    StatFormat::Currency => format!("{:.0} VND", stat.value),
                    StatFormat::Number => format!("{:.0}", stat.value),
                    StatFormat::Percent => format!("{:.1}%", stat.value),
                };
                stats.row(vec![stat.label.clone(), value, format!("{:+.1}%", stat.change)]);
            }
            out.push(stats.render());

            let mut orders = Table::new(vec!["ORDER", "PARTNER", "TOTAL", "STATUS"]);
            for order in &data.recent_orders {
                orders.row(vec![
                    order.id.clone(),
                    order.partner.clone(),
                    format!("{:.0}", order.total),
                    format!("{:?}", order.status).to_lowercase(),
                ]);
            }
            out.push(orders.render());

            let mut approvals = Table::new(vec!["APPROVAL", "NAME", "PRIORITY"]);
            for approval in &data.approvals {
                approvals.row(vec![
                    approval.id.clone(),
                    approval.name.clone(),
                    format!("{:?}", approval.priority).to_lowercase(),
                ]);
            }
            out.push(approvals.render());

            out.push(format!(
                "API uptime {:.1}%  latency {:.0} ms  errors {:.1}%  (synced {})",
                data.api_health.uptime,
                data.api_health.avg_latency,
                data.api_health.error_rate,
                data.last_synced_at.format("%Y-%m-%d %H:%M UTC"),
            ));
            out.join("\n\n")
        })
    }
}

fn salary_range(post: &RecruitmentPostDto) -> String {
    match (post.salary_min, post.salary_max) {
        (Some(min), Some(max)) => format!("{min}-{max} {}", post.salary_currency),
        (Some(min), None) => format!("from {min} {}", post.salary_currency),
        (None, Some(max)) => format!("up to {max} {}", post.salary_currency),
        (None, None) => "negotiable".to_string(),
    }
}

fn strength_text(report: &PasswordStrengthReport) -> String {
    let mut text = format!("strength: {} ({}/100)", report.strength, report.score);
    for hint in &report.feedback {
        text.push_str(&format!("\n  - {hint}"));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{CatalogKind, EntityStatus};
    use crate::domain::user::evaluate_password;

    fn entity(name: &str, slug: &str) -> CatalogEntityDto {
        CatalogEntityDto {
            id: format!("rec-{slug}"),
            kind: CatalogKind::Location,
            name: name.into(),
            slug: slug.into(),
            status: EntityStatus::Active,
            created_at: None,
        }
    }

    #[test]
    fn table_aligns_columns_by_char_count() {
        let text = Output::new(false)
            .catalog_entities(&[entity("Hà Nội", "ha-noi"), entity("Huế", "hue")])
            .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "SLUG    NAME    STATUS  ID");
        assert_eq!(lines[2], "ha-noi  Hà Nội  Active  rec-ha-noi");
        assert_eq!(lines[3], "hue     Huế     Active  rec-hue");
    }

    #[test]
    fn empty_table_says_so() {
        let text = Output::new(false).users(&[]).unwrap();
        assert!(text.ends_with("(no records)"));
    }

    #[test]
    fn json_mode_serializes_dtos() {
        let text = Output::new(true)
            .catalog_entities(&[entity("Huế", "hue")])
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["slug"], "hue");
        assert_eq!(value[0]["status"], "Active");
        assert_eq!(value[0]["kind"], "location");
    }

    #[test]
    fn strength_lists_feedback() {
        let text = Output::new(false)
            .password_strength(&evaluate_password("abc"))
            .unwrap();
        assert!(text.starts_with("strength: weak"));
        assert!(text.contains("\n  - use at least 6 characters"));
    }
}
