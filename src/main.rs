//! Entry point for the counter demo page.
//! Every `<counter-app>` element in the document becomes a live widget,
//! configured from its own attributes.

fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    counter_app::mount_all();
}
