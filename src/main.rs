mod app;
mod app_runtime;
mod page_host;
mod row;
mod site_config;
mod storefront;
mod tutorial;
mod views;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    // Classification must finish before the storefront registers anything.
    let context = site_config::load_boot_context();
    gloo::console::log!("boot: environment", context.environment.label());
    app_runtime::set_boot_context(context);
    yew::Renderer::<App>::new().render();
}
