use tabled::{settings::Style, Table, Tabled};
use crate::model::{CareerPathSummary, DbStats};

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

#[derive(Tabled)]
struct CareerRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Skills")]
    skills: String,
    #[tabled(rename = "Weeks")]
    weeks: i64,
}

impl From<&CareerPathSummary> for CareerRow {
    fn from(path: &CareerPathSummary) -> Self {
        Self {
            id: path.career_id,
            title: path.title.clone().unwrap_or_default(),
            skills: path.skills().join(", "),
            weeks: path.duration_weeks,
        }
    }
}

pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            metric: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

pub fn stats_table(stats: &DbStats) -> String {
    let mut builder = TableBuilder::new();
    builder.add_row("Users", &stats.users.to_string());
    builder.add_row("Career paths", &stats.career_paths.to_string());
    builder.add_row("Skills (est.)", &stats.skills.to_string());
    builder.build()
}

pub fn careers_table(paths: &[CareerPathSummary]) -> String {
    if paths.is_empty() {
        return String::new();
    }
    let rows: Vec<CareerRow> = paths.iter().map(CareerRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}
