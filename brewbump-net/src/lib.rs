// brewbump-net/src/lib.rs
pub mod http;
pub mod pypi;
pub mod validation;

// Re-export the public fetching functions
pub use http::{build_http_client, verify_remote_checksum};
pub use pypi::{fetch_latest_release, fetch_project, release_from_project};
pub use validation::{validate_sha256_digest, validate_url};
