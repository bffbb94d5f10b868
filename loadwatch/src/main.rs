use leptos::mount::mount_to_body;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

use loadwatch::routes::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new()); // write events to the console
    tracing_subscriber::registry().with(fmt_layer).init();
    mount_to_body(App);
}
