pub mod client;
mod data;
