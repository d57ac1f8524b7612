pub mod http;
pub mod mailer;

pub use http::HttpRelay;
pub use mailer::{MailRelay, RelayError};
