use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finance(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finance").unwrap();
    cmd.env("FINANCE_TRACKER_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn test_init_seeds_default_categories() {
    let data_dir = TempDir::new().unwrap();

    finance(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    finance(&data_dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food & Dining"))
        .stdout(predicate::str::contains("#95a5a6"));
}

#[test]
fn test_expense_shows_up_in_report() {
    let data_dir = TempDir::new().unwrap();

    finance(&data_dir)
        .args(["income", "add", "800", "--source", "Salary"])
        .assert()
        .success();
    finance(&data_dir)
        .args([
            "expense",
            "add",
            "120",
            "--category",
            "Food & Dining",
            "--description",
            "Groceries",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded expense: $120.00"));

    finance(&data_dir)
        .args(["report", "Last 30 days"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Net Savings: $680.00"))
        .stdout(predicate::str::contains("Food & Dining: $120.00 (100.0%)"));
}

#[test]
fn test_report_csv_export() {
    let data_dir = TempDir::new().unwrap();
    let output = data_dir.path().join("report.csv");

    finance(&data_dir)
        .args(["expense", "add", "40", "-c", "Transportation", "--description", "Bus pass"])
        .assert()
        .success();
    finance(&data_dir)
        .args(["report", "7d", "--output"])
        .arg(&output)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("Start Date,End Date,Type,Name,Amount,Percentage"));
    assert!(csv.contains(",Expense,Transportation,40.00,100.00"));
}

#[test]
fn test_unknown_report_period_fails() {
    let data_dir = TempDir::new().unwrap();

    finance(&data_dir)
        .args(["report", "Last fortnight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown report period"));
}

#[test]
fn test_expense_with_unknown_category_fails() {
    let data_dir = TempDir::new().unwrap();

    finance(&data_dir)
        .args(["expense", "add", "5", "-c", "Gardening", "--description", "Seeds"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found: Gardening"));
}

#[test]
fn test_budget_set_and_status() {
    let data_dir = TempDir::new().unwrap();

    finance(&data_dir)
        .args(["budget", "set", "Shopping", "100", "--month", "3", "--year", "2024"])
        .assert()
        .success();
    finance(&data_dir)
        .args(["budget", "set", "Shopping", "150", "--month", "3", "--year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("set to $150.00"));

    finance(&data_dir)
        .args(["budget", "status", "--month", "3", "--year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shopping (on-track)"))
        .stdout(predicate::str::contains("Spent $0.00 of $150.00, $150.00 left"));
}

#[test]
fn test_budget_rejects_zero_amount() {
    let data_dir = TempDir::new().unwrap();

    finance(&data_dir)
        .args(["budget", "set", "Shopping", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn test_dashboard_on_empty_data() {
    let data_dir = TempDir::new().unwrap();

    finance(&data_dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Top Category:   None"))
        .stdout(predicate::str::contains("No recent transactions."));
}
