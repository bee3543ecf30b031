//! formal-forge: CLI generator for print-ready school HR documents
//!
//! Fills appointment letters and salary receipts from the command line and
//! emits a self-contained HTML page the browser's print dialog turns into a
//! PDF. Teacher pay/identity profiles persist locally and can be merged into
//! a receipt by id.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod documents;
mod roster;

use commands::utils::RenderFormat;
use documents::{AppointmentLetterData, SalaryReceiptData};
use roster::{TeacherInput, TeacherStore};

#[derive(Parser)]
#[command(name = "formal-forge")]
#[command(about = "Generate print-ready appointment letters and salary receipts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the stored teacher roster
    Teacher {
        #[command(subcommand)]
        command: TeacherCommands,
    },

    /// Generate an appointment letter
    Letter {
        /// School / organization name
        #[arg(long, default_value = "")]
        school_name: String,

        /// Logo image URL for the letterhead
        #[arg(long, default_value = "")]
        logo_url: String,

        /// School address
        #[arg(long, default_value = "")]
        address: String,

        /// School contact line (phone, email)
        #[arg(long, default_value = "")]
        contact: String,

        /// Letter date (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Recipient name
        #[arg(long, default_value = "")]
        recipient_name: String,

        /// Appointed designation
        #[arg(long, default_value = "")]
        designation: String,

        /// Employee ID
        #[arg(long, default_value = "")]
        employee_id: String,

        /// Reporting date (defaults to today)
        #[arg(long)]
        reporting_date: Option<String>,

        /// Terms and conditions, free text
        #[arg(long, default_value = "")]
        terms: String,

        /// Principal / head name for the signature block
        #[arg(long, default_value = "")]
        principal_name: String,

        /// Output format: html or text (default: html)
        #[arg(long, short, default_value = "html")]
        format: String,

        /// Output file (prints to stdout if omitted)
        #[arg(long, short)]
        output: Option<String>,
    },

    /// Generate a salary receipt
    Receipt {
        /// Stored teacher id to fill identity and pay fields from
        #[arg(long, short)]
        teacher: Option<String>,

        /// Salary month, e.g. "January 2026"
        #[arg(long, default_value = "")]
        month: String,

        /// Employee name
        #[arg(long, default_value = "")]
        employee_name: String,

        /// Employee ID
        #[arg(long, default_value = "")]
        employee_id: String,

        /// Designation
        #[arg(long, default_value = "")]
        designation: String,

        /// Basic pay
        #[arg(long, default_value_t = 0.0)]
        basic_pay: f64,

        /// House rent allowance
        #[arg(long, default_value_t = 0.0)]
        hra: f64,

        /// Other allowances
        #[arg(long, default_value_t = 0.0)]
        allowances: f64,

        /// Deductions
        #[arg(long, default_value_t = 0.0)]
        deductions: f64,

        /// Accountant name for the signature block
        #[arg(long, default_value = "")]
        accountant_name: String,

        /// Principal / head name for the signature block
        #[arg(long, default_value = "")]
        principal_name: String,

        /// Output format: html or text (default: html)
        #[arg(long, short, default_value = "html")]
        format: String,

        /// Output file (prints to stdout if omitted)
        #[arg(long, short)]
        output: Option<String>,
    },
}

#[derive(Subcommand)]
enum TeacherCommands {
    /// Add a teacher profile (pass --id to update a stored one)
    Add {
        /// Teacher name (required)
        name: String,

        /// Update the stored record with this id instead of adding
        #[arg(long)]
        id: Option<String>,

        /// Employee ID
        #[arg(long)]
        employee_id: Option<String>,

        /// Designation
        #[arg(long)]
        designation: Option<String>,

        /// Basic pay
        #[arg(long)]
        basic_pay: Option<f64>,

        /// House rent allowance
        #[arg(long)]
        hra: Option<f64>,

        /// Other allowances
        #[arg(long)]
        allowances: Option<f64>,

        /// Deductions
        #[arg(long)]
        deductions: Option<f64>,
    },

    /// List stored teacher profiles
    List,

    /// Remove a teacher profile by id
    Remove {
        /// Teacher id as shown by `teacher list`
        id: String,
    },
}

/// Today's date the way the form defaults it, e.g. "2026-08-24"
fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

fn parse_format(s: &str) -> Result<RenderFormat> {
    RenderFormat::from_str(s).context("Invalid format. Use 'html' or 'text'")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Teacher { command } => {
            let store = TeacherStore::open_default()?;
            match command {
                TeacherCommands::Add {
                    name,
                    id,
                    employee_id,
                    designation,
                    basic_pay,
                    hra,
                    allowances,
                    deductions,
                } => {
                    let input = TeacherInput {
                        name,
                        employee_id,
                        designation,
                        basic_pay,
                        hra,
                        allowances,
                        deductions,
                    };
                    commands::teachers::add(&store, input, id.as_deref())?;
                }
                TeacherCommands::List => {
                    let output = commands::teachers::list(&store)?;
                    println!("{}", output);
                }
                TeacherCommands::Remove { id } => {
                    commands::teachers::remove(&store, &id)?;
                }
            }
        }

        Commands::Letter {
            school_name,
            logo_url,
            address,
            contact,
            date,
            recipient_name,
            designation,
            employee_id,
            reporting_date,
            terms,
            principal_name,
            format,
            output,
        } => {
            let data = AppointmentLetterData {
                school_name,
                logo_url,
                address,
                contact,
                date: date.unwrap_or_else(today),
                recipient_name,
                designation,
                employee_id,
                reporting_date: reporting_date.unwrap_or_else(today),
                terms,
                principal_name,
            };
            let format = parse_format(&format)?;
            let output = output.map(PathBuf::from);
            commands::letter::execute(&data, format, output.as_deref())?;
        }

        Commands::Receipt {
            teacher,
            month,
            employee_name,
            employee_id,
            designation,
            basic_pay,
            hra,
            allowances,
            deductions,
            accountant_name,
            principal_name,
            format,
            output,
        } => {
            let store = TeacherStore::open_default()?;
            let data = SalaryReceiptData {
                month,
                employee_name,
                employee_id,
                designation,
                basic_pay,
                hra,
                allowances,
                deductions,
                accountant_name,
                principal_name,
                amount_in_words: String::new(),
            };
            let format = parse_format(&format)?;
            let output = output.map(PathBuf::from);
            commands::receipt::execute(
                &store,
                data,
                teacher.as_deref(),
                format,
                output.as_deref(),
            )?;
        }
    }

    Ok(())
}
