pub mod use_invoice_form;
pub mod use_login_form;
pub mod use_preview;
pub mod use_session_gate;

pub use use_invoice_form::{use_invoice_form, UseInvoiceFormHandle};
pub use use_login_form::{use_login_form, UseLoginFormHandle};
pub use use_preview::{use_preview, UsePreviewHandle};
pub use use_session_gate::{use_session_gate, UseSessionGateHandle};
