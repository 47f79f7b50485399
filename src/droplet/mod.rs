//! Droplet creation: request assembly, credentials and result reporting

pub mod report;
pub mod request;
pub mod token;

pub use report::{report, Outcome, SUCCESS_BANNER};
pub use request::{build_create_request, DropletRequest, PreparedRequest, DROPLETS_PATH};
pub use token::AccessToken;
