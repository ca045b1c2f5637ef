mod feed;
mod jobs;
mod navigation;
mod state;

pub use state::{App, Connection, View};
