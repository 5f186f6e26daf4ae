pub mod app;
pub mod comments_section;
pub mod expense_line_card;
pub mod fields;
pub mod invoice_details;
pub mod invoice_form;
pub mod login_screen;
pub mod pdf_viewer;
pub mod tab_bar;
pub mod upload_box;
pub mod vendor_details;

pub use app::{App, AppProps};
pub use invoice_form::InvoiceForm;
pub use login_screen::LoginScreen;
pub use pdf_viewer::PdfViewer;
pub use tab_bar::{Tab, TabBar};
