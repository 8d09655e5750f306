//! Text views of API responses.

use api_client::WorkersView;
use core_types::{
    AnalyticsData, DashboardStats, Department, TreasuryTransaction, format_percent,
    format_timestamp, format_usd, shorten_wallet,
};

use crate::table::{Column, Table};

fn key_values(pairs: &[(&str, String)]) -> String {
    let mut table = Table::new(vec![Column::left("Metric"), Column::right("Value")]);
    for (key, value) in pairs {
        table.add_row(vec![key.to_string(), value.clone()]);
    }
    table.render()
}

pub fn dashboard(stats: &DashboardStats) -> String {
    let mut out = key_values(&[
        ("Treasury Balance", format_usd(stats.treasury_balance)),
        ("Revenue This Month", format_usd(stats.revenue_this_month)),
        ("Payroll This Month", format_usd(stats.payroll_this_month)),
        ("Profit", format_usd(stats.profit)),
        ("Margin", format_percent(stats.margin)),
    ]);

    if !stats.revenue_vs_payroll.is_empty() {
        let mut table = Table::new(vec![
            Column::left("Date"),
            Column::right("Revenue"),
            Column::right("Payroll"),
        ]);
        for point in &stats.revenue_vs_payroll {
            table.add_row(vec![
                point.date.clone(),
                format_usd(point.revenue),
                format_usd(point.payroll),
            ]);
        }
        out.push('\n');
        out.push_str(&table.render());
    }
    out
}

pub fn departments(departments: &[Department]) -> String {
    if departments.is_empty() {
        return "No departments yet.\n".to_string();
    }

    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("Name"),
        Column::right("Workers"),
        Column::right("Monthly Payroll"),
        Column::left("Status"),
    ]);
    for d in departments {
        table.add_row(vec![
            d.id.to_string(),
            d.name.clone(),
            d.worker_count.to_string(),
            format_usd(d.total_monthly_payroll),
            d.status_label().to_string(),
        ]);
    }
    table.render()
}

pub fn workers(view: &WorkersView) -> String {
    if view.workers.is_empty() {
        return "No workers yet.\n".to_string();
    }

    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("Name"),
        Column::left("Department"),
        Column::right("Salary"),
        Column::left("Wallet"),
        Column::left("Status"),
    ]);
    for w in &view.workers {
        table.add_row(vec![
            w.id.to_string(),
            w.name.clone(),
            view.department_name(w).to_string(),
            w.salary_display(),
            shorten_wallet(&w.wallet),
            w.status_label().to_string(),
        ]);
    }
    table.render()
}

pub fn transactions(transactions: &[TreasuryTransaction]) -> String {
    if transactions.is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let mut table = Table::new(vec![
        Column::left("Type"),
        Column::right("Amount"),
        Column::left("Date"),
        Column::left("Description"),
    ]);
    for tx in transactions {
        table.add_row(vec![
            tx.kind.label().to_string(),
            tx.signed_amount(),
            format_timestamp(&tx.timestamp),
            tx.description_or_dash().to_string(),
        ]);
    }
    table.render()
}

pub fn analytics(data: &AnalyticsData) -> String {
    let mut out = key_values(&[
        ("Most Expensive Department", data.most_expensive_department.clone()),
        ("Total Employees", data.total_employees.to_string()),
        ("Average Salary", format_usd(data.average_salary)),
    ]);

    let total: f64 = data.spend_per_department.iter().map(|d| d.value.max(0.0)).sum();
    if total > 0.0 {
        let mut table = Table::new(vec![
            Column::left("Department"),
            Column::right("Spend"),
            Column::right("Share"),
        ]);
        for d in &data.spend_per_department {
            table.add_row(vec![
                d.name.clone(),
                format_usd(d.value),
                format!("{:.0}%", d.value.max(0.0) / total * 100.0),
            ]);
        }
        out.push('\n');
        out.push_str(&table.render());
    }
    out
}
