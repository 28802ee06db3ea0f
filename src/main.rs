use std::path::Path;

use chrono::Local;

use inecam::consts::{ACCESS_TOKEN, API_BASE_URL, CAPTURE_PROGRAM, IMAGE_DIR};
use inecam::mastodon::Client;

fn main() {
    let client = Client::new(API_BASE_URL, ACCESS_TOKEN);

    // Local system time, taken exactly once; the file name and the caption
    // both derive from it.
    let now = Local::now().naive_local();

    match inecam::run(&client, CAPTURE_PROGRAM, Path::new(IMAGE_DIR), now) {
        Ok(status) => println!("{}", status.url.unwrap_or(status.id)),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
