mod shorten;

pub use shorten::{ErrorResponse, ShortenRequest, ShortenResponse};
