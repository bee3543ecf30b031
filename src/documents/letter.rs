//! Appointment letter data model and renderers

use super::page::{self, escape, join_present, or_placeholder};

/// One appointment letter's worth of form state
///
/// Every field is a plain string; blank means "not filled in" and renders
/// as a placeholder. Nothing here is persisted - the record lives only for
/// one rendering session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentLetterData {
    pub school_name: String,
    pub logo_url: String,
    pub address: String,
    pub contact: String,
    pub date: String,
    pub recipient_name: String,
    pub designation: String,
    pub employee_id: String,
    pub reporting_date: String,
    pub terms: String,
    pub principal_name: String,
}

impl AppointmentLetterData {
    /// Title for the generated document, e.g. "A. Rao-Letter"
    pub fn document_title(&self) -> String {
        format!(
            "{}-Letter",
            or_placeholder(&self.recipient_name, "Appointment")
        )
    }

    /// Render the letter as a self-contained print-ready HTML page
    pub fn to_html(&self) -> String {
        let mut body = String::new();

        // Letterhead
        body.push_str("<header style=\"display:flex;align-items:center;gap:16px;margin-bottom:24px\">\n");
        if !self.logo_url.trim().is_empty() {
            body.push_str(&format!(
                "<img src=\"{}\" alt=\"{} logo\" style=\"height:64px;width:64px;object-fit:contain\">\n",
                escape(&self.logo_url),
                escape(&self.school_name),
            ));
        }
        body.push_str(&format!(
            "<div><h1>{}</h1>\n",
            escape(or_placeholder(&self.school_name, "School / Organization"))
        ));
        let contact_line = join_present(&[&self.address, &self.contact], " • ");
        if !contact_line.is_empty() {
            body.push_str(&format!("<p class=\"muted\">{}</p>\n", escape(&contact_line)));
        }
        body.push_str("</div>\n</header>\n");

        body.push_str("<div class=\"center\" style=\"margin-bottom:24px\"><h2>Appointment Letter</h2></div>\n");

        // Addressing block
        body.push_str(&format!(
            "<p><span class=\"strong\">Date:</span> {}</p>\n",
            escape(&self.date)
        ));
        if !self.employee_id.trim().is_empty() {
            body.push_str(&format!(
                "<p><span class=\"strong\">Employee ID:</span> {}</p>\n",
                escape(&self.employee_id)
            ));
        }
        body.push_str("<p><span class=\"strong\">To,</span></p>\n");
        body.push_str(&format!(
            "<p class=\"strong\">{}</p>\n",
            escape(or_placeholder(&self.recipient_name, "Recipient Name"))
        ));
        body.push_str(&format!(
            "<p><em>{}</em></p>\n",
            escape(or_placeholder(&self.designation, "Designation"))
        ));

        // Body paragraphs
        let at_school = if self.school_name.trim().is_empty() {
            String::new()
        } else {
            format!(" at {}", escape(&self.school_name))
        };
        body.push_str(&format!(
            "<p>We are pleased to inform you that you have been appointed as \
<span class=\"strong\">{}</span>{}. Your appointment is confirmed with effect from \
<span class=\"strong\">{}</span>.</p>\n",
            escape(or_placeholder(&self.designation, "[Designation]")),
            at_school,
            escape(or_placeholder(&self.reporting_date, "[Reporting Date]")),
        ));
        body.push_str(
            "<p>You are required to report to the Head of Institution/Principal on the \
reporting date. Kindly bring all necessary documents for verification.</p>\n",
        );
        if !self.terms.trim().is_empty() {
            body.push_str(&format!(
                "<p class=\"strong\">Terms and Conditions:</p>\n<p class=\"terms\">{}</p>\n",
                escape(&self.terms)
            ));
        }
        body.push_str(
            "<p>We welcome you and look forward to your valuable contribution to the institution.</p>\n",
        );

        // Signatures
        body.push_str(&format!(
            "<div class=\"columns\">\n<div><p class=\"strong\">Sincerely,</p>\
<p class=\"signature\">{}</p><p class=\"muted\">Principal / Head of Institution</p></div>\n\
<div class=\"right\"><p class=\"strong\">Signature</p>\
<p class=\"signature\" style=\"border-top:1px solid #ddd;min-width:10rem\">&nbsp;</p></div>\n</div>\n",
            escape(or_placeholder(&self.principal_name, "Principal / Head")),
        ));

        if !contact_line.is_empty() {
            body.push_str(&format!(
                "<footer class=\"center muted\">{}</footer>\n",
                escape(&contact_line)
            ));
        }

        page::shell(&self.document_title(), &body)
    }

    /// Render the letter as plain text, for a quick terminal preview
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();

        lines.push(
            or_placeholder(&self.school_name, "School / Organization")
                .trim()
                .to_string(),
        );
        let contact_line = join_present(&[&self.address, &self.contact], " • ");
        if !contact_line.is_empty() {
            lines.push(contact_line.clone());
        }
        lines.push(String::new());
        lines.push("APPOINTMENT LETTER".to_string());
        lines.push(String::new());
        lines.push(format!("Date: {}", self.date));
        if !self.employee_id.trim().is_empty() {
            lines.push(format!("Employee ID: {}", self.employee_id));
        }
        lines.push("To,".to_string());
        lines.push(or_placeholder(&self.recipient_name, "Recipient Name").to_string());
        lines.push(or_placeholder(&self.designation, "Designation").to_string());
        lines.push(String::new());

        let at_school = if self.school_name.trim().is_empty() {
            String::new()
        } else {
            format!(" at {}", self.school_name)
        };
        lines.push(format!(
            "We are pleased to inform you that you have been appointed as {}{}. \
Your appointment is confirmed with effect from {}.",
            or_placeholder(&self.designation, "[Designation]"),
            at_school,
            or_placeholder(&self.reporting_date, "[Reporting Date]"),
        ));
        lines.push(String::new());
        lines.push(
            "You are required to report to the Head of Institution/Principal on the reporting \
date. Kindly bring all necessary documents for verification."
                .to_string(),
        );
        if !self.terms.trim().is_empty() {
            lines.push(String::new());
            lines.push("Terms and Conditions:".to_string());
            lines.push(self.terms.clone());
        }
        lines.push(String::new());
        lines.push(
            "We welcome you and look forward to your valuable contribution to the institution."
                .to_string(),
        );
        lines.push(String::new());
        lines.push("Sincerely,".to_string());
        lines.push(or_placeholder(&self.principal_name, "Principal / Head").to_string());
        lines.push("Principal / Head of Institution".to_string());

        lines.join("\n")
    }
}
