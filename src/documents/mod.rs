//! Document data models and print-ready renderers

pub mod letter;
pub mod page;
pub mod receipt;
pub mod words;

// Re-exports for library consumers
#[allow(unused_imports)]
pub use letter::AppointmentLetterData;
#[allow(unused_imports)]
pub use receipt::SalaryReceiptData;
#[allow(unused_imports)]
pub use words::amount_in_words;
