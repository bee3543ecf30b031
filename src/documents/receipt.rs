//! Salary receipt data model and renderers

use super::page::{self, escape, or_placeholder};
use crate::roster::Teacher;

/// One salary receipt's worth of form state
///
/// `amount_in_words` is computed upstream from the net pay (see
/// [`crate::documents::words`]); gross and net are always derived here so a
/// stale pre-computed total can never reach the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaryReceiptData {
    pub month: String,
    pub employee_name: String,
    pub employee_id: String,
    pub designation: String,
    pub basic_pay: f64,
    pub hra: f64,
    pub allowances: f64,
    pub deductions: f64,
    pub accountant_name: String,
    pub principal_name: String,
    pub amount_in_words: String,
}

impl SalaryReceiptData {
    /// Gross pay: basic + HRA + allowances, before deductions
    pub fn gross(&self) -> f64 {
        self.basic_pay + self.hra + self.allowances
    }

    /// Net pay: gross minus deductions, floored at zero
    pub fn net(&self) -> f64 {
        (self.gross() - self.deductions).max(0.0)
    }

    /// Merge a stored teacher profile into the working state
    ///
    /// A stored field overrides the current value only when it is present;
    /// absent fields leave whatever was already typed in untouched. The
    /// name is required on every stored record and always wins.
    pub fn apply_teacher(&mut self, teacher: &Teacher) {
        self.employee_name = teacher.name.clone();
        if let Some(employee_id) = &teacher.employee_id {
            self.employee_id = employee_id.clone();
        }
        if let Some(designation) = &teacher.designation {
            self.designation = designation.clone();
        }
        if let Some(basic_pay) = teacher.basic_pay {
            self.basic_pay = basic_pay;
        }
        if let Some(hra) = teacher.hra {
            self.hra = hra;
        }
        if let Some(allowances) = teacher.allowances {
            self.allowances = allowances;
        }
        if let Some(deductions) = teacher.deductions {
            self.deductions = deductions;
        }
    }

    /// Title for the generated document, e.g. "A. Rao-Receipt-January 2026"
    pub fn document_title(&self) -> String {
        let name = or_placeholder(&self.employee_name, "Salary");
        if self.month.trim().is_empty() {
            format!("{}-Receipt", name)
        } else {
            format!("{}-Receipt-{}", name, self.month)
        }
    }

    /// Render the receipt as a self-contained print-ready HTML page
    pub fn to_html(&self) -> String {
        let mut body = String::new();

        body.push_str(&format!(
            "<div class=\"center\" style=\"margin-bottom:24px\"><h2>Salary Receipt</h2>\
<p class=\"muted\">Salary Month: {}</p></div>\n",
            escape(or_placeholder(&self.month, "[Month]")),
        ));

        // Identity lines; id and designation only when present
        body.push_str(&format!(
            "<p><span class=\"strong\">Employee Name:</span> {}</p>\n",
            escape(or_placeholder(&self.employee_name, "[Name]"))
        ));
        if !self.employee_id.trim().is_empty() {
            body.push_str(&format!(
                "<p><span class=\"strong\">Employee ID:</span> {}</p>\n",
                escape(&self.employee_id)
            ));
        }
        if !self.designation.trim().is_empty() {
            body.push_str(&format!(
                "<p><span class=\"strong\">Designation:</span> {}</p>\n",
                escape(&self.designation)
            ));
        }

        // Pay component table
        body.push_str("<table style=\"margin-top:16px\">\n<thead><tr><th>Component</th>\
<th class=\"amount\">Amount (&#8377;)</th></tr></thead>\n<tbody>\n");
        let mut row = |label: &str, class: &str, value: String| {
            body.push_str(&format!(
                "<tr><td class=\"{class}\">{label}</td><td class=\"amount {class}\">{value}</td></tr>\n",
            ));
        };
        row("Basic Pay", "", format!("{:.2}", self.basic_pay));
        row("HRA", "", format!("{:.2}", self.hra));
        row("Allowances", "", format!("{:.2}", self.allowances));
        row("Gross Pay", "strong", format!("{:.2}", self.gross()));
        row("Deductions", "deduction", format!("-{:.2}", self.deductions));
        row("Net Pay", "strong", format!("{:.2}", self.net()));
        body.push_str("</tbody>\n</table>\n");

        body.push_str(&format!(
            "<p style=\"margin-top:12px\"><span class=\"strong\">Total (in words):</span> {}</p>\n",
            escape(or_placeholder(&self.amount_in_words, "[Amount in words]")),
        ));

        // Signatures
        body.push_str(&format!(
            "<div class=\"columns\">\n<div><p class=\"strong\">Accountant</p>\
<p class=\"signature\">{}</p></div>\n\
<div class=\"right\"><p class=\"strong\">Principal/Head</p>\
<p class=\"signature\">{}</p></div>\n</div>\n",
            escape(or_placeholder(&self.accountant_name, "[Accountant Name]")),
            escape(or_placeholder(&self.principal_name, "[Principal Name]")),
        ));

        page::shell(&self.document_title(), &body)
    }

    /// Render the receipt as plain text, for a quick terminal preview
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();

        lines.push("SALARY RECEIPT".to_string());
        lines.push(format!(
            "Salary Month: {}",
            or_placeholder(&self.month, "[Month]")
        ));
        lines.push(String::new());
        lines.push(format!(
            "Employee Name: {}",
            or_placeholder(&self.employee_name, "[Name]")
        ));
        if !self.employee_id.trim().is_empty() {
            lines.push(format!("Employee ID: {}", self.employee_id));
        }
        if !self.designation.trim().is_empty() {
            lines.push(format!("Designation: {}", self.designation));
        }
        lines.push(String::new());
        lines.push(format!("{:<14}{:>14}", "Component", "Amount"));
        lines.push(format!("{:<14}{:>14.2}", "Basic Pay", self.basic_pay));
        lines.push(format!("{:<14}{:>14.2}", "HRA", self.hra));
        lines.push(format!("{:<14}{:>14.2}", "Allowances", self.allowances));
        lines.push(format!("{:<14}{:>14.2}", "Gross Pay", self.gross()));
        lines.push(format!(
            "{:<14}{:>14}",
            "Deductions",
            format!("-{:.2}", self.deductions)
        ));
        lines.push(format!("{:<14}{:>14.2}", "Net Pay", self.net()));
        lines.push(String::new());
        lines.push(format!(
            "Total (in words): {}",
            or_placeholder(&self.amount_in_words, "[Amount in words]")
        ));
        lines.push(String::new());
        lines.push(format!(
            "Accountant: {}",
            or_placeholder(&self.accountant_name, "[Accountant Name]")
        ));
        lines.push(format!(
            "Principal/Head: {}",
            or_placeholder(&self.principal_name, "[Principal Name]")
        ));

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::words::amount_in_words;

    fn rao() -> SalaryReceiptData {
        SalaryReceiptData {
            month: "January 2026".to_string(),
            employee_name: "A. Rao".to_string(),
            basic_pay: 30000.0,
            hra: 5000.0,
            allowances: 2000.0,
            deductions: 1000.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_gross_and_net() {
        let data = rao();
        assert_eq!(data.gross(), 37000.0);
        assert_eq!(data.net(), 36000.0);
    }

    #[test]
    fn test_net_is_clamped_at_zero() {
        let data = SalaryReceiptData {
            basic_pay: 1000.0,
            deductions: 5000.0,
            ..Default::default()
        };
        assert_eq!(data.net(), 0.0);
    }

    #[test]
    fn test_words_line_for_net_pay() {
        let data = rao();
        assert_eq!(
            amount_in_words(data.net()),
            "Thirty Six Thousand Rupees Only"
        );
    }

    #[test]
    fn test_all_zero_receipt_has_no_words() {
        let data = SalaryReceiptData::default();
        assert_eq!(data.gross(), 0.0);
        assert_eq!(data.net(), 0.0);
        assert_eq!(amount_in_words(data.net()), "");
        // The page falls back to the literal placeholder
        assert!(data.to_html().contains("[Amount in words]"));
    }

    #[test]
    fn test_apply_teacher_merges_present_fields_only() {
        let mut data = SalaryReceiptData {
            employee_name: "Typed Name".to_string(),
            designation: "Typed Designation".to_string(),
            basic_pay: 111.0,
            hra: 222.0,
            ..Default::default()
        };
        let teacher = Teacher {
            id: "t-1".to_string(),
            name: "A. Rao".to_string(),
            employee_id: Some("EMP-42".to_string()),
            designation: None,
            basic_pay: Some(30000.0),
            hra: None,
            allowances: Some(2000.0),
            deductions: None,
        };

        data.apply_teacher(&teacher);

        assert_eq!(data.employee_name, "A. Rao");
        assert_eq!(data.employee_id, "EMP-42");
        // Absent stored fields leave typed values untouched
        assert_eq!(data.designation, "Typed Designation");
        assert_eq!(data.hra, 222.0);
        assert_eq!(data.basic_pay, 30000.0);
        assert_eq!(data.allowances, 2000.0);
        assert_eq!(data.deductions, 0.0);
    }

    #[test]
    fn test_title() {
        assert_eq!(rao().document_title(), "A. Rao-Receipt-January 2026");
        assert_eq!(
            SalaryReceiptData::default().document_title(),
            "Salary-Receipt"
        );
    }

    #[test]
    fn test_html_formats_amounts_to_two_decimals() {
        let html = rao().to_html();
        assert!(html.contains("30000.00"));
        assert!(html.contains("37000.00"));
        assert!(html.contains("-1000.00"));
        assert!(html.contains("36000.00"));
        assert!(html.contains("<title>A. Rao-Receipt-January 2026</title>"));
    }

    #[test]
    fn test_optional_identity_lines_omitted_when_blank() {
        let html = rao().to_html();
        assert!(!html.contains("Employee ID:"));
        assert!(!html.contains("Designation:"));
    }

    #[test]
    fn test_rendering_is_pure() {
        let data = rao();
        assert_eq!(data.to_html(), data.to_html());
        assert_eq!(data.to_text(), data.to_text());
    }
}
