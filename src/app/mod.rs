// Request boundary: raw parameters in, status + body out.

pub mod handlers;

pub use handlers::{get_squad, parse_transfer_params, transfers, ApiResponse};
