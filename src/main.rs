mod actions;
mod config;
mod diff;
mod library;
mod matching;
mod remote;
mod report;
mod runtime;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
