use std::fmt;

use crate::data::Account;

const HEADERS: [&str; 4] = ["Email", "Name", "Admin", "Security Admin"];

#[derive(Debug, Clone, PartialEq)]
pub struct SecurityRow {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub admin: bool,
    pub security_admin: bool,
}

impl SecurityRow {
    fn cells(&self) -> [&str; 4] {
        [
            &self.email,
            &self.name,
            yes_no(self.admin),
            yes_no(self.security_admin),
        ]
    }
}

impl From<&Account> for SecurityRow {
    fn from(account: &Account) -> Self {
        let full_name = format!("{} {}", account.first_name.trim(), account.last_name.trim());
        let full_name = full_name.trim();

        let name = if full_name.is_empty() {
            account
                .email
                .split('@')
                .next()
                .unwrap_or_default()
                .to_owned()
        } else {
            full_name.to_owned()
        };

        SecurityRow {
            id: account.id,
            email: account.email.clone(),
            name,
            admin: account.is_admin,
            security_admin: account.is_security_admin,
        }
    }
}

/// Accounts with their role flags, for security administrators. Renders as plain text.
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityTable {
    pub rows: Vec<SecurityRow>,
}

impl SecurityTable {
    pub fn new(accounts: &[Account]) -> Self {
        SecurityTable {
            rows: accounts.iter().map(SecurityRow::from).collect(),
        }
    }

    fn widths(&self) -> [usize; 4] {
        let mut widths = HEADERS.map(|h| h.chars().count());

        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        widths
    }
}

impl fmt::Display for SecurityTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();

        write_line(f, &HEADERS, &widths)?;

        let separator = widths.map(|w| "-".repeat(w));
        write_line(f, &separator.each_ref().map(String::as_str), &widths)?;

        for row in &self.rows {
            write_line(f, &row.cells(), &widths)?;
        }

        Ok(())
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: &[&str; 4], widths: &[usize; 4]) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");

    writeln!(f, "{}", line.trim_end())
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::memory::account;

    #[test]
    fn renders_header_and_rows() {
        let mut admin = account(1, "ana@example.org", "Ana", "Lopez");
        admin.is_admin = true;
        let member = account(2, "bo@example.org", "", "");

        let table = SecurityTable::new(&[admin, member]);

        assert_eq!(
            table.to_string(),
            [
                "Email           | Name      | Admin | Security Admin",
                "--------------- | --------- | ----- | --------------",
                "ana@example.org | Ana Lopez | yes   | no",
                "bo@example.org  | bo        | no    | no",
                "",
            ]
            .join("\n")
        );
    }

    #[test]
    fn empty_table_has_header_only() {
        let table = SecurityTable::new(&[]);

        assert_eq!(
            table.to_string(),
            "Email | Name | Admin | Security Admin\n----- | ---- | ----- | --------------\n"
        );
    }

    #[test]
    fn name_uses_whichever_part_exists() {
        let row = SecurityRow::from(&account(3, "cy@example.org", "", "Nguyen"));

        assert_eq!(row.name, "Nguyen");
    }
}
