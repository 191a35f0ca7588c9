mod client;
mod phone;
mod search;

pub use client::{Client, ClientField, ClientPatch, NewClient};
pub use phone::Phone;
pub use search::{ClientFilter, ClientSearchRow};
