pub mod airtable;
pub mod http;
pub mod repositories;
pub mod security;
pub mod time;
pub mod util;
